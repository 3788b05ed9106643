//! # Conversation Transcript
//!
//! Domain types for the message thread. A `Message` is immutable once
//! created; the `Transcript` is an append-only ordered sequence that lives
//! in memory only - quitting the program loses the history.

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the conversation thread.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Citation labels attached to assistant answers. Always empty for user
    /// messages and for error bubbles.
    pub sources: Vec<String>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            sources: Vec::new(),
        }
    }

    pub fn assistant(content: impl Into<String>, sources: Vec<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            sources,
        }
    }
}

/// The ordered, append-only sequence of exchanged messages in the current
/// session.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message. There is deliberately no way to edit or remove a
    /// single entry - only `clear` (new chat) resets the thread.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user("first"));
        transcript.push(Message::assistant("second", vec![]));
        transcript.push(Message::user("third"));

        let contents: Vec<&str> = transcript
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_user_messages_carry_no_sources() {
        let msg = Message::user("What is the leave policy?");
        assert_eq!(msg.role, Role::User);
        assert!(msg.sources.is_empty());
    }

    #[test]
    fn test_assistant_message_keeps_source_order() {
        let msg = Message::assistant("See the rules.", vec!["Rule 12".into(), "Rule 3".into()]);
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.sources, vec!["Rule 12", "Rule 3"]);
    }

    #[test]
    fn test_clear_empties_transcript() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user("hello"));
        assert!(!transcript.is_empty());

        transcript.clear();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
    }
}
