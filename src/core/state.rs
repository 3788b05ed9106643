//! # Application State
//!
//! Core business state for the chat client. This module contains domain
//! state only - no TUI-specific types. Presentation state lives in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn ChatBackend>      // HTTP API (or a test stub)
//! ├── transcript: Transcript             // append-only message thread
//! ├── conversation_id: Option<String>    // backend-issued dialogue token
//! ├── suggested_questions: Vec<String>   // fetched once at startup
//! ├── is_loading: bool                   // request in flight
//! ├── backend_healthy: Option<bool>      // None until the probe resolves
//! ├── status_message: String             // title bar text
//! └── generation: u64                    // stale-response fence
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::api::ChatBackend;
use crate::core::transcript::Transcript;

pub struct App {
    pub backend: Arc<dyn ChatBackend>,
    pub transcript: Transcript,
    /// Issued by the backend on the first response; sent back on every
    /// follow-up request. `None` until then and again after a new chat.
    pub conversation_id: Option<String>,
    pub suggested_questions: Vec<String>,
    /// True strictly between request dispatch and its resolution. Gates
    /// submission - at most one chat request is outstanding.
    pub is_loading: bool,
    pub backend_healthy: Option<bool>,
    pub status_message: String,
    /// Bumped by every new chat. Requests are tagged with the generation at
    /// dispatch; a response whose tag no longer matches is discarded instead
    /// of landing in a transcript that has since been reset.
    pub generation: u64,
}

impl App {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            backend,
            transcript: Transcript::new(),
            conversation_id: None,
            suggested_questions: Vec::new(),
            is_loading: false,
            backend_healthy: None,
            status_message: String::new(),
            generation: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.transcript.is_empty());
        assert!(app.conversation_id.is_none());
        assert!(app.suggested_questions.is_empty());
        assert!(!app.is_loading);
        assert!(app.backend_healthy.is_none());
        assert_eq!(app.generation, 0);
    }
}
