//! Poll cycle errors

use homework_client::ClientError;
use homework_core::{FormatError, ResponseError};
use thiserror::Error;

/// Anything that can go wrong between fetching and formatting
///
/// Each stage reports its own error type; the poller converts every
/// variant into a failure notification in one place.
#[derive(Debug, Error)]
pub enum CycleError {
    /// Transport or protocol failure talking to the grading API
    #[error(transparent)]
    Api(#[from] ClientError),

    /// The response body has the wrong shape
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// The homework record cannot be reported
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl CycleError {
    /// Text sent to the chat when a cycle fails
    pub fn notification(&self) -> String {
        format!("Сбой в работе программы: {}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_carries_cause() {
        let err = CycleError::from(FormatError::UnknownStatus("unknown_code".to_string()));
        assert_eq!(
            err.notification(),
            "Сбой в работе программы: unknown status code: unknown_code"
        );

        let err = CycleError::from(ClientError::api_error(503, "Service Unavailable"));
        assert_eq!(
            err.notification(),
            "Сбой в работе программы: API error (status 503): Service Unavailable"
        );
    }
}
