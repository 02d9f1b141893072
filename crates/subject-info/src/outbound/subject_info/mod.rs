//! Subject info outbound adapters.
//!
//! This module provides a thin HTTP implementation of the
//! `SubjectInfoSubmitter` port.

mod http_submitter;

pub use http_submitter::{HttpSubjectInfoSubmitter, SubjectInfoHttpIdentity};
