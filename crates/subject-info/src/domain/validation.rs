//! Subject selection validation.
//!
//! Rules run in a fixed order and the first failure is reported:
//!
//! 1. every field is filled in
//! 2. major and minor differ
//! 3. the course is known
//! 4. the major is offered for the course
//! 5. the minor is offered for the course
//!
//! The duplicate check runs before the membership checks so a repeated
//! subject is reported as such even when it belongs to only one list.

use thiserror::Error;

use super::{SubjectCatalog, SubjectSelection};
use crate::domain::CatalogError;

/// Why a candidate selection was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectionReason {
    /// At least one of course, major or minor is empty.
    #[error("Please select all fields")]
    IncompleteSelection,

    /// The course is not in the catalog.
    #[error("Unknown course: {course}")]
    UnknownCourse {
        /// Raw course value supplied by the caller.
        course: String,
    },

    /// The major is not offered for the course.
    #[error("{major} is not a major option for {course}")]
    InvalidMajor {
        /// Course the major was checked against.
        course: String,
        /// Rejected major subject.
        major: String,
    },

    /// The minor is not offered for the course.
    #[error("{minor} is not a minor option for {course}")]
    InvalidMinor {
        /// Course the minor was checked against.
        course: String,
        /// Rejected minor subject.
        minor: String,
    },

    /// Major and minor name the same subject.
    #[error("Major and Minor subjects cannot be the same")]
    DuplicateSubject,
}

impl RejectionReason {
    /// Stable machine-readable code for the rejection.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::IncompleteSelection => "incomplete_selection",
            Self::UnknownCourse { .. } => "unknown_course",
            Self::InvalidMajor { .. } => "invalid_major",
            Self::InvalidMinor { .. } => "invalid_minor",
            Self::DuplicateSubject => "duplicate_subject",
        }
    }
}

/// Outcome of validating a candidate selection.
pub type ValidationResult = Result<SubjectSelection, RejectionReason>;

/// Checks candidate selections against a [`SubjectCatalog`].
///
/// Validation is a pure function of its inputs and the catalog, so a
/// validator can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct SubjectSelectionValidator {
    catalog: SubjectCatalog,
}

impl SubjectSelectionValidator {
    /// Wrap a catalog.
    #[must_use]
    pub const fn new(catalog: SubjectCatalog) -> Self {
        Self { catalog }
    }

    /// Validator over the built-in catalog.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogError`] from [`SubjectCatalog::standard`].
    pub fn standard() -> Result<Self, CatalogError> {
        SubjectCatalog::standard().map(Self::new)
    }

    /// Catalog used for membership checks.
    #[must_use]
    pub const fn catalog(&self) -> &SubjectCatalog {
        &self.catalog
    }

    /// Validate a candidate selection. Empty strings mean "not chosen".
    ///
    /// # Errors
    ///
    /// Returns the [`RejectionReason`] of the first rule that fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use subject_info::domain::{RejectionReason, SubjectSelectionValidator};
    ///
    /// let validator = SubjectSelectionValidator::standard().expect("catalog");
    ///
    /// let selection = validator.validate("BA", "History", "Hindi").expect("accepted");
    /// assert_eq!(selection.major(), "History");
    ///
    /// assert_eq!(
    ///     validator.validate("BA", "History", "History"),
    ///     Err(RejectionReason::DuplicateSubject)
    /// );
    /// ```
    pub fn validate(&self, course: &str, major: &str, minor: &str) -> ValidationResult {
        if course.is_empty() || major.is_empty() || minor.is_empty() {
            return Err(RejectionReason::IncompleteSelection);
        }
        if major == minor {
            return Err(RejectionReason::DuplicateSubject);
        }
        let (code, options) =
            self.catalog
                .lookup(course)
                .map_err(|_| RejectionReason::UnknownCourse {
                    course: course.to_owned(),
                })?;
        if !options.has_major(major) {
            return Err(RejectionReason::InvalidMajor {
                course: course.to_owned(),
                major: major.to_owned(),
            });
        }
        if !options.has_minor(minor) {
            return Err(RejectionReason::InvalidMinor {
                course: course.to_owned(),
                minor: minor.to_owned(),
            });
        }
        Ok(SubjectSelection::new(code, major, minor))
    }
}
