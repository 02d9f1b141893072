//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **subject_info**: reqwest-backed submission of accepted selections
//!
//! Adapters translate between domain types and transport representations.
//! They contain no validation logic.

pub mod subject_info;
