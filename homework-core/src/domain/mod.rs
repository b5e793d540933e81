//! Core domain types
//!
//! The homework record as reported by the grading API and the fixed
//! catalog of review statuses with their human-readable verdicts.

pub mod homework;
pub mod status;
