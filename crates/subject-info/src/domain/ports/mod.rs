//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod subject_info_submitter;

#[cfg(test)]
pub(crate) use subject_info_submitter::MockSubjectInfoSubmitter;
pub use subject_info_submitter::{
    FixtureSubjectInfoSubmitter, SubjectInfoSubmitError, SubjectInfoSubmitter,
};
