//! HTTP client for the AbiaCS Assistant backend.
//!
//! One request in flight at a time (the UI's loading flag guarantees it), no
//! retries - the first failure of a chat request is terminal and surfaces to
//! the user as an error bubble. The two auxiliary calls (suggested questions,
//! health) are non-critical and never fail: they degrade to an empty list /
//! `false` and log at warn level.

use async_trait::async_trait;
use log::{debug, warn};
use std::fmt;
use std::time::Duration;

use super::types::{ChatReply, ChatRequest, ErrorBody, HealthBody, SuggestedQuestionsBody};

/// Errors a chat request can fail with.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Backend returned a non-success status. `message` is the backend's own
    /// `{error}` text when the body parses, else a generic fallback that
    /// embeds the status code.
    Api { status: u16, message: String },
    /// A success response whose body didn't match the expected shape.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            // Shown verbatim in a chat bubble, so no prefix - the backend's
            // error text (or the fallback) already reads as a sentence.
            ApiError::Api { message, .. } => write!(f, "{message}"),
            ApiError::Parse(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// The seam between the UI and the network. `ApiClient` is the real
/// implementation; tests drive the app with a stub instead.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one user message, optionally continuing an existing conversation.
    /// `message` must be non-empty; the caller trims.
    async fn send_message(
        &self,
        message: &str,
        conversation_id: Option<&str>,
    ) -> Result<ChatReply, ApiError>;

    /// Fetch the shortcut prompts shown before the first message.
    /// Non-critical: any failure yields an empty list.
    async fn fetch_suggested_questions(&self) -> Vec<String>;

    /// True only if the backend explicitly reports `status == "ok"`.
    /// Never fails.
    async fn check_health(&self) -> bool;
}

/// Reqwest-backed client for the assistant API.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Build a client against `base_url` (no trailing slash) with a hard
    /// per-request timeout. A request that outlives the timeout resolves
    /// into `ApiError::Network` like any other transport failure.
    pub fn new(base_url: String, request_timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .expect("reqwest client construction only fails on broken TLS setup");
        Self { base_url, http }
    }
}

#[async_trait]
impl ChatBackend for ApiClient {
    async fn send_message(
        &self,
        message: &str,
        conversation_id: Option<&str>,
    ) -> Result<ChatReply, ApiError> {
        let request = ChatRequest {
            message: message.to_string(),
            conversation_id: conversation_id.map(str::to_string),
        };

        debug!(
            "POST /api/chat ({} chars, continuation={})",
            message.len(),
            conversation_id.is_some()
        );

        let response = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let status = status.as_u16();
            // Best-effort parse of the backend's error body; fall back to a
            // generic message carrying the status code.
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| format!("Request failed with status {status}"));
            warn!("chat request rejected: HTTP {status} - {message}");
            return Err(ApiError::Api { status, message });
        }

        response
            .json::<ChatReply>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn fetch_suggested_questions(&self) -> Vec<String> {
        let url = format!("{}/api/suggested-questions", self.base_url);
        let response = match self.http.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("suggested questions unavailable: {e}");
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            warn!(
                "suggested questions unavailable: HTTP {}",
                response.status()
            );
            return Vec::new();
        }

        match response.json::<SuggestedQuestionsBody>().await {
            Ok(body) => body.questions,
            Err(e) => {
                warn!("suggested questions body malformed: {e}");
                Vec::new()
            }
        }
    }

    async fn check_health(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        let Ok(response) = self.http.get(&url).send().await else {
            return false;
        };
        match response.json::<HealthBody>().await {
            Ok(body) => body.status == "ok",
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Nothing listens on port 9; connections fail fast.
    fn unreachable_client() -> ApiClient {
        ApiClient::new(
            "http://127.0.0.1:9".to_string(),
            Duration::from_millis(500),
        )
    }

    #[test]
    fn test_api_error_display_shows_backend_message_verbatim() {
        let err = ApiError::Api {
            status: 500,
            message: "backend down".to_string(),
        };
        assert_eq!(err.to_string(), "backend down");
    }

    #[test]
    fn test_api_error_display_network_and_parse_are_prefixed() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "network error: connection refused");

        let err = ApiError::Parse("missing field `response`".to_string());
        assert_eq!(err.to_string(), "malformed response: missing field `response`");
    }

    #[test]
    fn test_send_message_network_failure_is_network_error() {
        let client = unreachable_client();
        let result = tokio_test::block_on(client.send_message("hello", None));
        assert!(matches!(result, Err(ApiError::Network(_))));
    }

    #[test]
    fn test_fetch_suggested_questions_swallows_network_failure() {
        let client = unreachable_client();
        let questions = tokio_test::block_on(client.fetch_suggested_questions());
        assert!(questions.is_empty());
    }

    #[test]
    fn test_check_health_false_on_network_failure() {
        let client = unreachable_client();
        assert!(!tokio_test::block_on(client.check_health()));
    }
}
