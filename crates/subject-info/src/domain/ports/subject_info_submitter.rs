//! Driven port for handing accepted selections to the submission backend.
//!
//! The domain owns the payload and the error contract so the orchestration
//! service stays transport-agnostic.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::SubjectSelection;

define_port_error! {
    /// Errors surfaced while submitting a selection.
    pub enum SubjectInfoSubmitError {
        /// Network transport failed before receiving a response.
        Transport {
            /// Transport error description.
            message: String,
        } =>
            "subject info transport failed: {message}",
        /// The submission exceeded its timeout.
        Timeout {
            /// Timeout description.
            message: String,
        } =>
            "subject info submission timed out: {message}",
        /// The backend refused the payload.
        Rejected {
            /// HTTP status returned by the backend.
            status: u16,
            /// Response body preview.
            message: String,
        } => "subject info rejected with status {status}: {message}",
        /// The backend failed while handling the payload.
        Server {
            /// HTTP status returned by the backend.
            status: u16,
            /// Response body preview.
            message: String,
        } => "subject info backend error {status}: {message}",
    }
}

/// Port for submitting accepted subject selections.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubjectInfoSubmitter: Send + Sync {
    /// Submit `selection`, resolving once the backend has stored it.
    async fn submit(&self, selection: &SubjectSelection) -> Result<(), SubjectInfoSubmitError>;
}

/// Submitter that accepts every selection without contacting a backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSubjectInfoSubmitter;

#[async_trait]
impl SubjectInfoSubmitter for FixtureSubjectInfoSubmitter {
    async fn submit(&self, selection: &SubjectSelection) -> Result<(), SubjectInfoSubmitError> {
        tracing::debug!(
            course = %selection.course(),
            major = selection.major(),
            minor = selection.minor(),
            "fixture submitter accepted selection"
        );
        Ok(())
    }
}
