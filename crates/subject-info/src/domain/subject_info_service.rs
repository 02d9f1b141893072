//! Subject info submission orchestration.
//!
//! Validates a candidate selection locally and forwards accepted payloads to
//! the [`SubjectInfoSubmitter`] port. Validation failures never reach the
//! port; port failures are surfaced unchanged.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::ports::{SubjectInfoSubmitError, SubjectInfoSubmitter};
use super::{RejectionReason, SubjectInfoForm, SubjectSelection, SubjectSelectionValidator};

/// Failure of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The selection was rejected locally.
    #[error(transparent)]
    Validation(#[from] RejectionReason),
    /// The submitter failed.
    #[error(transparent)]
    Submission(#[from] SubjectInfoSubmitError),
}

/// Validates selections and hands accepted ones to a submitter.
pub struct SubjectInfoService<S> {
    validator: SubjectSelectionValidator,
    submitter: Arc<S>,
}

impl<S> SubjectInfoService<S>
where
    S: SubjectInfoSubmitter,
{
    /// Create a service from a validator and submitter.
    pub const fn new(validator: SubjectSelectionValidator, submitter: Arc<S>) -> Self {
        Self {
            validator,
            submitter,
        }
    }

    /// Validator used for local checks.
    pub const fn validator(&self) -> &SubjectSelectionValidator {
        &self.validator
    }

    /// Validate and submit one selection.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Validation`] without calling the submitter when
    /// the selection is rejected, and [`SubmitError::Submission`] when the
    /// submitter fails.
    pub async fn submit(
        &self,
        course: &str,
        major: &str,
        minor: &str,
    ) -> Result<SubjectSelection, SubmitError> {
        let selection = self
            .validator
            .validate(course, major, minor)
            .inspect_err(|reason| {
                debug!(code = reason.code(), %reason, "subject selection rejected");
            })?;
        self.dispatch(&selection).await?;
        Ok(selection)
    }

    /// Drive a form through one submit attempt.
    ///
    /// Does nothing when the form is already loading or its fields are
    /// rejected; the form records the rejection itself.
    pub async fn submit_form(&self, form: &mut SubjectInfoForm) {
        let Some(selection) = form.begin_submit(&self.validator) else {
            if let Some(reason) = form.local_error() {
                debug!(code = reason.code(), %reason, "subject form rejected");
            }
            return;
        };
        let outcome = self.dispatch(&selection).await;
        form.finish_submit(outcome);
    }

    async fn dispatch(&self, selection: &SubjectSelection) -> Result<(), SubjectInfoSubmitError> {
        match self.submitter.submit(selection).await {
            Ok(()) => {
                info!(
                    course = %selection.course(),
                    major = selection.major(),
                    minor = selection.minor(),
                    "subject info submitted"
                );
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, course = %selection.course(), "subject info submission failed");
                Err(err)
            }
        }
    }
}
