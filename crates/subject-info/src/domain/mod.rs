//! Domain types, validation rules and ports.
//!
//! Nothing here depends on a transport or rendering toolkit; adapters live
//! under [`crate::outbound`].

pub mod ports;

mod catalog;
mod course;
mod selection;
mod subject_info_form;
mod subject_info_service;
mod validation;

pub use catalog::{CatalogError, SubjectCatalog, SubjectOptions, SubjectRole};
pub use course::{CourseCode, CourseCodeParseError};
pub use selection::SubjectSelection;
pub use subject_info_form::{SUBMIT_SUCCESS_MESSAGE, SubjectInfoForm, SubmissionStatus};
pub use subject_info_service::{SubjectInfoService, SubmitError};
pub use validation::{RejectionReason, SubjectSelectionValidator, ValidationResult};
