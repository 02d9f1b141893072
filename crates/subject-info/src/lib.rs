//! Course and subject selection rules with validated submission.
//!
//! A user picks a course and two distinct subjects (major and minor) from a
//! fixed catalog. [`domain::SubjectSelectionValidator`] checks the choice,
//! [`domain::SubjectInfoForm`] tracks the interaction state, and
//! [`domain::SubjectInfoService`] hands accepted selections to a
//! [`domain::ports::SubjectInfoSubmitter`].
//!
//! # Example
//!
//! ```
//! use subject_info::domain::{RejectionReason, SubjectSelectionValidator};
//!
//! let validator = SubjectSelectionValidator::standard().expect("built-in catalog");
//!
//! assert!(validator.validate("BA", "History", "Hindi").is_ok());
//! assert_eq!(
//!     validator.validate("MBA", "Finance", "Economics"),
//!     Err(RejectionReason::UnknownCourse { course: "MBA".to_owned() })
//! );
//! ```

pub mod config;
pub mod domain;
pub mod outbound;

pub use config::{SettingsError, SubjectInfoSettings};
