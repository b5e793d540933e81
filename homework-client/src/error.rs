//! Error types for the homework clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the grading API or the chat API
///
/// Transport failures are split by kind so the caller can report what
/// actually went wrong; none of them are retried here.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Could not connect to the remote host
    #[error("connection failed: {0}")]
    Connection(#[source] reqwest::Error),

    /// The request did not complete in time
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The redirect limit was exceeded
    #[error("too many redirects: {0}")]
    TooManyRedirects(#[source] reqwest::Error),

    /// Any other transport failure
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    /// API returned an unexpected status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body or API-provided description
        message: String,
    },

    /// Failed to parse response
    #[error("failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Classifies a reqwest error into the matching transport kind
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else if err.is_connect() {
            Self::Connection(err)
        } else if err.is_redirect() {
            Self::TooManyRedirects(err)
        } else {
            Self::RequestFailed(err)
        }
    }

    /// Check if this error happened below the HTTP layer
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Connection(_)
                | Self::Timeout(_)
                | Self::TooManyRedirects(_)
                | Self::RequestFailed(_)
        )
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::from_transport(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        let err = ClientError::api_error(503, "Service Unavailable");
        assert!(err.is_server_error());
        assert!(!err.is_client_error());
        assert!(!err.is_transport());

        let err = ClientError::api_error(401, "unauthorized");
        assert!(err.is_client_error());
        assert!(!err.is_server_error());
    }

    #[test]
    fn test_api_error_display() {
        let err = ClientError::api_error(503, "Service Unavailable");
        assert_eq!(
            err.to_string(),
            "API error (status 503): Service Unavailable"
        );
    }

    #[test]
    fn test_parse_error_is_not_transport() {
        let err = ClientError::ParseError("expected value at line 1".to_string());
        assert!(!err.is_transport());
        assert!(!err.is_server_error());
    }
}
