//! Notification message formatting

use thiserror::Error;

use crate::domain::homework::HomeworkRecord;
use crate::domain::status::HomeworkStatus;

/// Reasons a homework record cannot be turned into a message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A required field is missing from the record
    #[error("incomplete homework record: missing `{0}`")]
    IncompleteRecord(&'static str),

    /// The status code is not in the catalog
    #[error("unknown status code: {0}")]
    UnknownStatus(String),
}

/// Builds the status-change notification for a homework record
///
/// The text is consumed by people and scripts reading the chat, so the
/// template must not change.
pub fn format_status(record: &HomeworkRecord) -> Result<String, FormatError> {
    let status = record
        .status
        .as_deref()
        .ok_or(FormatError::IncompleteRecord("status"))?;
    let name = record
        .name
        .as_deref()
        .ok_or(FormatError::IncompleteRecord("homework_name"))?;

    let status = HomeworkStatus::from_code(status)
        .ok_or_else(|| FormatError::UnknownStatus(status.to_string()))?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}
