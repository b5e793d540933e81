//! Homework domain types

use serde_json::Value as JsonValue;

/// A single homework entry reported by the grading API
///
/// Fields are optional because the payload is untrusted; the formatter
/// decides whether a record is complete enough to report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub name: Option<String>,
    pub status: Option<String>,
}

impl HomeworkRecord {
    /// Creates a complete record
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            status: Some(status.into()),
        }
    }

    /// Extracts a record from one element of the `homeworks` array
    ///
    /// The name is read from `homework_name`, falling back to `name`.
    /// Non-string values count as absent and a non-object element
    /// yields an empty record.
    pub fn from_json(value: &JsonValue) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        let text = |key: &str| {
            object
                .get(key)
                .and_then(JsonValue::as_str)
                .map(str::to_string)
        };

        Self {
            name: text("homework_name").or_else(|| text("name")),
            status: text("status"),
        }
    }
}
