//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{ApiError, ChatBackend, ChatReply};
use crate::core::state::App;

/// A canned backend for tests that never touch the network. The reducer
/// tests only need `App` to hold *a* backend; the reply here is returned
/// verbatim if something does call it.
pub struct StubBackend {
    pub reply: ChatReply,
    pub questions: Vec<String>,
    pub healthy: bool,
}

impl Default for StubBackend {
    fn default() -> Self {
        Self {
            reply: ChatReply {
                response: "stub answer".to_string(),
                sources: Vec::new(),
                conversation_id: "stub-conversation".to_string(),
            },
            questions: Vec::new(),
            healthy: true,
        }
    }
}

#[async_trait]
impl ChatBackend for StubBackend {
    async fn send_message(
        &self,
        _message: &str,
        _conversation_id: Option<&str>,
    ) -> Result<ChatReply, ApiError> {
        Ok(self.reply.clone())
    }

    async fn fetch_suggested_questions(&self) -> Vec<String> {
        self.questions.clone()
    }

    async fn check_health(&self) -> bool {
        self.healthy
    }
}

/// Creates a test App backed by a default StubBackend.
pub fn test_app() -> App {
    App::new(Arc::new(StubBackend::default()))
}
