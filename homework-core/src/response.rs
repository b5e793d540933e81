//! Response validation
//!
//! Checks the shape of a decoded grading API body and picks out the
//! homework to report on. The API lists homeworks newest-first, so only
//! the first entry is considered.

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::domain::homework::HomeworkRecord;

/// Reasons a response body is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    /// The body is not a JSON object
    #[error("unexpected response shape: expected an object, got {0}")]
    UnexpectedShape(&'static str),

    /// The `homeworks` key is absent or does not hold an array
    #[error("missing or malformed homeworks key")]
    MalformedHomeworks,
}

/// Validates a raw response and returns the most recent homework
///
/// Returns `Ok(None)` when the `homeworks` array is present but empty,
/// which means there is nothing to report this cycle.
pub fn validate_response(raw: &JsonValue) -> Result<Option<HomeworkRecord>, ResponseError> {
    let object = raw
        .as_object()
        .ok_or_else(|| ResponseError::UnexpectedShape(kind_of(raw)))?;

    let homeworks = object
        .get("homeworks")
        .and_then(JsonValue::as_array)
        .ok_or(ResponseError::MalformedHomeworks)?;

    Ok(homeworks.first().map(HomeworkRecord::from_json))
}

fn kind_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
