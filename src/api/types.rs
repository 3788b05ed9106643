//! Wire types for the AbiaCS Assistant backend API.
//!
//! Three endpoints, all JSON:
//! - `POST /api/chat` - ask a question, optionally continuing a conversation
//! - `GET /api/suggested-questions` - shortcut prompts for the empty state
//! - `GET /health` - liveness probe

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/chat`.
///
/// `conversation_id` is omitted from the JSON entirely on the first message;
/// the backend issues one in its response and expects it back on every
/// follow-up so it can keep server-side context.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

/// Success body for `POST /api/chat`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ChatReply {
    /// The assistant's answer text.
    pub response: String,
    /// Citation labels for the documents the answer was drawn from.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Token correlating requests into one logical dialogue. Opaque.
    pub conversation_id: String,
}

/// Error body the backend sends with non-success statuses. Best effort -
/// the field may be missing and the body may not be JSON at all.
#[derive(Deserialize, Debug, Default)]
pub struct ErrorBody {
    pub error: Option<String>,
}

/// Success body for `GET /api/suggested-questions`.
#[derive(Deserialize, Debug, Default)]
pub struct SuggestedQuestionsBody {
    #[serde(default)]
    pub questions: Vec<String>,
}

/// Success body for `GET /health`.
#[derive(Deserialize, Debug)]
pub struct HealthBody {
    pub status: String,
}
