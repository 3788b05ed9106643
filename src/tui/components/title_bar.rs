//! # TitleBar Component
//!
//! One-line header above the transcript showing which conversation is active
//! and any transient status text ("Thinking...", "Backend unreachable").
//!
//! Stateless: all fields are props from the parent, rendered as a single
//! `Span`. A bordered block would cost two extra rows for no benefit here.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

/// Top status line.
///
/// # Props
///
/// - `conversation_id`: the backend-issued dialogue token, if any
/// - `status_message`: transient status (empty = nothing to report)
pub struct TitleBar {
    pub conversation_id: Option<String>,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(conversation_id: Option<String>, status_message: String) -> Self {
        Self {
            conversation_id,
            status_message,
        }
    }

    /// Conversation ids are opaque UUIDs - show only a short prefix.
    fn conversation_label(&self) -> String {
        match &self.conversation_id {
            Some(id) => {
                let short: String = id.chars().take(8).collect();
                format!("conversation {short}")
            }
            None => String::from("new conversation"),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("AbiaCS Assistant | {}", self.conversation_label())
        } else {
            format!(
                "AbiaCS Assistant | {} | {}",
                self.conversation_label(),
                self.status_message
            )
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
