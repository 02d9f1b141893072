//! Accepted subject selections.
//!
//! Purpose: carry a course with a distinct major and minor that have already
//! been checked against the catalog. Values are only built by
//! [`crate::domain::SubjectSelectionValidator`].

use serde::Serialize;

use crate::domain::CourseCode;

/// A validated course, major and minor triple ready for submission.
///
/// Serialises to the submission payload
/// `{"course": "BA", "majorSubject": "History", "minorSubject": "Hindi"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectSelection {
    course: CourseCode,
    major_subject: String,
    minor_subject: String,
}

impl SubjectSelection {
    pub(crate) fn new(
        course: CourseCode,
        major_subject: impl Into<String>,
        minor_subject: impl Into<String>,
    ) -> Self {
        Self {
            course,
            major_subject: major_subject.into(),
            minor_subject: minor_subject.into(),
        }
    }

    /// Selected course.
    #[rustfmt::skip]
    #[must_use]
    pub const fn course(&self) -> CourseCode { self.course }

    /// Selected major subject.
    #[must_use]
    pub fn major(&self) -> &str {
        &self.major_subject
    }

    /// Selected minor subject.
    #[must_use]
    pub fn minor(&self) -> &str {
        &self.minor_subject
    }
}
