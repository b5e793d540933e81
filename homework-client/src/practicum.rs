//! Grading API client

use reqwest::{Client, StatusCode, header};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::{clip_error_body, error_body};

/// HTTP client for the homework statuses endpoint
#[derive(Clone)]
pub struct PracticumClient {
    /// Full URL of the statuses endpoint
    endpoint: String,
    /// OAuth token sent with every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new grading API client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the homework statuses endpoint
    /// * `token` - OAuth token for the `Authorization` header
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new grading API client with a custom HTTP client
    ///
    /// Use this to bound requests with a timeout.
    ///
    /// # Example
    /// ```
    /// use homework_client::PracticumClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = PracticumClient::with_client(
    ///     "https://practicum.yandex.ru/api/user_api/homework_statuses/",
    ///     "my-token",
    ///     http_client,
    /// );
    /// ```
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch homework statuses changed since `from_date`
    ///
    /// Only HTTP 200 with a JSON body counts as success. The body is
    /// returned undecoded so the caller can validate its shape.
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp marking the start of the poll window
    pub async fn homework_statuses(&self, from_date: i64) -> Result<JsonValue> {
        debug!("Requesting homework statuses from_date={}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = error_body(response).await;
            return Err(ClientError::api_error(
                status.as_u16(),
                clip_error_body(&body),
            ));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ClientError::ParseError(format!("response is not valid JSON: {}", e)))
    }
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const STATUSES_PATH: &str = "/api/user_api/homework_statuses/";

    fn client_for(server: &MockServer) -> PracticumClient {
        PracticumClient::new(format!("{}{}", server.uri(), STATUSES_PATH), "secret")
    }

    #[tokio::test]
    async fn test_sends_token_and_from_date() {
        let server = MockServer::start().await;
        let body = json!({"homeworks": [], "current_date": 1700000600});

        Mock::given(method("GET"))
            .and(path(STATUSES_PATH))
            .and(query_param("from_date", "1700000000"))
            .and(header("Authorization", "OAuth secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .homework_statuses(1_700_000_000)
            .await
            .unwrap();
        assert_eq!(result, body);
    }

    #[tokio::test]
    async fn test_non_200_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).homework_statuses(0).await.unwrap_err();
        assert!(err.is_server_error());
        assert!(matches!(err, ClientError::ApiError { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_large_error_page_is_clipped() {
        let server = MockServer::start().await;
        let page = format!("<html>{}</html>", "x".repeat(6000));
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string(page))
            .mount(&server)
            .await;

        let err = client_for(&server).homework_statuses(0).await.unwrap_err();
        match err {
            ClientError::ApiError { status, message } => {
                assert_eq!(status, 503);
                assert!(message.starts_with("<html>xxx"));
                assert_eq!(message.chars().count(), crate::MAX_ERROR_BODY_CHARS + 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_other_success_codes_are_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let err = client_for(&server).homework_statuses(0).await.unwrap_err();
        assert!(matches!(err, ClientError::ApiError { status: 204, .. }));
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).homework_statuses(0).await.unwrap_err();
        assert!(matches!(err, ClientError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_timeout_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"homeworks": []}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let http = Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();
        let client =
            PracticumClient::with_client(format!("{}{}", server.uri(), STATUSES_PATH), "t", http);

        let err = client.homework_statuses(0).await.unwrap_err();
        assert!(matches!(err, ClientError::Timeout(_)));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_redirect_loop_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/loop"))
            .respond_with(ResponseTemplate::new(302).insert_header("Location", "/loop"))
            .mount(&server)
            .await;

        let client = PracticumClient::new(format!("{}/loop", server.uri()), "t");
        let err = client.homework_statuses(0).await.unwrap_err();
        assert!(matches!(err, ClientError::TooManyRedirects(_)));
    }

    #[tokio::test]
    async fn test_refused_connection_is_reported() {
        // Bind then drop a listener so the port is known to be closed
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = PracticumClient::new(format!("http://{}/", addr), "t");
        let err = client.homework_statuses(0).await.unwrap_err();
        assert!(matches!(err, ClientError::Connection(_)));
    }

    #[test]
    fn test_debug_hides_token() {
        let client = PracticumClient::new("http://localhost:8080/", "super-secret");
        let rendered = format!("{:?}", client);
        assert!(rendered.contains("http://localhost:8080/"));
        assert!(!rendered.contains("super-secret"));
    }
}
