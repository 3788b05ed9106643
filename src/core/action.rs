//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! API responds? That's `Action::ResponseArrived`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing I/O the caller must
//! perform. No side effects here - network calls happen in the TUI layer.
//!
//! ```text
//! State + Action  →  update()  →  mutated State + Effect
//! ```
//!
//! The conversation state machine has two states: idle (not loading) and
//! waiting (loading). `Submit` is the only idle→waiting edge and is guarded
//! by the loading flag, so chat requests are serialized. `ResponseArrived`
//! is the only waiting→idle edge - unless the response is from a stale
//! generation (the user started a new chat while it was in flight), in
//! which case it is dropped on the floor.

use log::{debug, info};

use crate::api::ChatReply;
use crate::core::state::App;
use crate::core::transcript::Message;

/// Everything that can happen.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// User submitted text - from the input box or a suggestion chip, both
    /// arrive here and obey the same guard.
    Submit(String),
    /// A chat request resolved. `generation` is the value the request was
    /// dispatched with; `result` carries the reply or a display-ready error
    /// message.
    ResponseArrived {
        generation: u64,
        result: Result<ChatReply, String>,
    },
    /// The startup suggested-questions fetch resolved.
    SuggestionsLoaded(Vec<String>),
    /// The startup health probe resolved.
    HealthChecked(bool),
    /// Clear the transcript and conversation id and start over.
    NewChat,
    Quit,
}

/// I/O the caller must perform after an `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Spawn a chat request. Carries everything the request task needs so it
    /// never has to read `App` again.
    SendMessage {
        text: String,
        conversation_id: Option<String>,
        generation: u64,
    },
    Quit,
}

/// Shown when a request fails without any usable error text.
pub const GENERIC_ERROR_MESSAGE: &str = "Sorry, something went wrong. Please try again.";

/// The reducer: applies `action` to `app`, returns the effect to run.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() || app.is_loading {
                debug!(
                    "submit ignored (empty={}, loading={})",
                    trimmed.is_empty(),
                    app.is_loading
                );
                return Effect::None;
            }

            // The user message lands in the transcript before the network
            // call starts, so the echo is immediate.
            app.transcript.push(Message::user(trimmed));
            app.is_loading = true;
            app.status_message = String::from("Thinking...");

            Effect::SendMessage {
                text: trimmed.to_string(),
                conversation_id: app.conversation_id.clone(),
                generation: app.generation,
            }
        }

        Action::ResponseArrived { generation, result } => {
            if generation != app.generation {
                // The conversation this request belonged to was reset while
                // it was in flight. Discard instead of appending into the
                // wrong transcript.
                info!(
                    "discarding response from stale generation {} (current {})",
                    generation, app.generation
                );
                return Effect::None;
            }

            app.is_loading = false;
            app.status_message.clear();

            match result {
                Ok(reply) => {
                    app.conversation_id = Some(reply.conversation_id);
                    app.transcript
                        .push(Message::assistant(reply.response, reply.sources));
                }
                Err(message) => {
                    let content = if message.is_empty() {
                        GENERIC_ERROR_MESSAGE.to_string()
                    } else {
                        message
                    };
                    app.transcript.push(Message::assistant(content, Vec::new()));
                }
            }
            Effect::None
        }

        Action::SuggestionsLoaded(questions) => {
            debug!("loaded {} suggested questions", questions.len());
            app.suggested_questions = questions;
            Effect::None
        }

        Action::HealthChecked(ok) => {
            app.backend_healthy = Some(ok);
            if !ok {
                app.status_message = String::from("Backend unreachable");
            }
            Effect::None
        }

        Action::NewChat => {
            // Unconditional, even mid-request: the in-flight task is not
            // cancelled, but bumping the generation fences its response out.
            app.transcript.clear();
            app.conversation_id = None;
            app.is_loading = false;
            app.status_message.clear();
            app.generation += 1;
            info!("new chat (generation {})", app.generation);
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}
