//! Interaction state for the subject information form.
//!
//! Purpose: track what the user has picked so far, the last local validation
//! failure and the progress of the submission, independent of any rendering
//! toolkit. A UI layer reads this state and forwards user events to it.

use super::{RejectionReason, SubjectCatalog, SubjectSelection, SubjectSelectionValidator};
use crate::domain::ports::SubjectInfoSubmitError;

/// Message shown once a submission has been stored.
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Subject info submitted!";

/// Progress of the asynchronous submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Nothing has been submitted yet.
    #[default]
    Idle,
    /// A submission is in flight.
    Pending,
    /// The last submission was stored.
    Succeeded,
    /// The last submission failed with the given message.
    Failed(String),
}

/// Form fields plus local and remote feedback.
///
/// Empty field values mean "not chosen yet".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectInfoForm {
    course: String,
    major: String,
    minor: String,
    local_error: Option<RejectionReason>,
    status: SubmissionStatus,
}

impl SubjectInfoForm {
    /// Empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a course. Clears both subjects and any local error, since
    /// subject options depend on the course.
    pub fn select_course(&mut self, course: impl Into<String>) {
        self.course = course.into();
        self.major.clear();
        self.minor.clear();
        self.local_error = None;
    }

    /// Choose the major subject.
    pub fn select_major(&mut self, major: impl Into<String>) {
        self.major = major.into();
    }

    /// Choose the minor subject.
    pub fn select_minor(&mut self, minor: impl Into<String>) {
        self.minor = minor.into();
    }

    /// Currently chosen course.
    #[must_use]
    pub fn course(&self) -> &str {
        &self.course
    }

    /// Currently chosen major.
    #[must_use]
    pub fn major(&self) -> &str {
        &self.major
    }

    /// Currently chosen minor.
    #[must_use]
    pub fn minor(&self) -> &str {
        &self.minor
    }

    /// Majors to offer; empty until a known course is chosen.
    #[must_use]
    pub fn major_options<'a>(&self, catalog: &'a SubjectCatalog) -> &'a [String] {
        catalog
            .lookup(&self.course)
            .map(|(_, options)| options.major())
            .unwrap_or_default()
    }

    /// Minors to offer; empty until a known course is chosen.
    #[must_use]
    pub fn minor_options<'a>(&self, catalog: &'a SubjectCatalog) -> &'a [String] {
        catalog
            .lookup(&self.course)
            .map(|(_, options)| options.minor())
            .unwrap_or_default()
    }

    /// Last local validation failure, if any.
    #[must_use]
    pub const fn local_error(&self) -> Option<&RejectionReason> {
        self.local_error.as_ref()
    }

    /// Submission progress.
    #[must_use]
    pub const fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Whether a submission is in flight; the submit control is disabled
    /// while this holds.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.status, SubmissionStatus::Pending)
    }

    /// Success banner text once the last submission was stored.
    #[must_use]
    pub const fn success_message(&self) -> Option<&'static str> {
        match self.status {
            SubmissionStatus::Succeeded => Some(SUBMIT_SUCCESS_MESSAGE),
            _ => None,
        }
    }

    /// Validate the current fields and, on success, mark the form pending.
    ///
    /// Returns the payload to hand to the submitter, or `None` when the
    /// fields were rejected or a submission is already in flight.
    pub fn begin_submit(&mut self, validator: &SubjectSelectionValidator) -> Option<SubjectSelection> {
        if self.is_loading() {
            return None;
        }
        match validator.validate(&self.course, &self.major, &self.minor) {
            Ok(selection) => {
                self.local_error = None;
                self.status = SubmissionStatus::Pending;
                Some(selection)
            }
            Err(reason) => {
                self.local_error = Some(reason);
                None
            }
        }
    }

    /// Record the outcome of the submission started by
    /// [`Self::begin_submit`].
    pub fn finish_submit(&mut self, outcome: Result<(), SubjectInfoSubmitError>) {
        self.status = match outcome {
            Ok(()) => SubmissionStatus::Succeeded,
            Err(err) => SubmissionStatus::Failed(err.to_string()),
        };
    }
}
