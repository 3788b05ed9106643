//! # MessageList Component
//!
//! Scrollable view of the conversation transcript.
//!
//! ## Responsibilities
//!
//! - Display the message bubbles in order
//! - Show a transient "Thinking" bubble while a request is in flight
//! - Manage scrolling (stick-to-bottom, manual scrollback, re-pinning)
//! - Cache per-message heights so layout never requires a render pass
//!
//! ## Architecture
//!
//! `MessageList` is a transient component (created each frame) that wraps
//! `&mut MessageListState` (persistent state) and the transcript (props).
//! Since `Component::render` takes `&mut self`, the state (height cache and
//! scroll position) can be updated during the render pass, aligning with
//! Ratatui's `StatefulWidget` pattern.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::transcript::Transcript;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::MessageView;
use crate::tui::event::TuiEvent;

/// Height of the transient thinking bubble (1 content line + borders).
const THINKING_HEIGHT: u16 = 3;
/// Animation frames for the thinking indicator.
const THINKING_FRAMES: [&str; 4] = ["Thinking", "Thinking.", "Thinking..", "Thinking..."];

/// Scroll and layout state for the message list.
/// Must be persisted in the parent TuiState.
pub struct MessageListState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Cached bubble heights from the last layout pass
    pub heights: Vec<u16>,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Last known viewport height (for page scrolling and clamping)
    pub viewport_height: u16,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            heights: Vec::new(),
            stick_to_bottom: true, // Start attached to bottom
            viewport_height: 0,
        }
    }

    fn total_height(&self) -> u16 {
        self.heights.iter().sum()
    }

    fn max_scroll(&self) -> u16 {
        self.total_height().saturating_sub(self.viewport_height)
    }

    /// Scroll by a signed number of rows, unpinning on upward movement and
    /// re-pinning when the bottom is reached again.
    pub fn scroll_by(&mut self, delta: i32) {
        let current = self.scroll_state.offset();
        let new_y = if delta < 0 {
            current.y.saturating_sub(delta.unsigned_abs() as u16)
        } else {
            current.y.saturating_add(delta as u16).min(self.max_scroll())
        };
        self.scroll_state.set_offset(Position { x: current.x, y: new_y });
        self.stick_to_bottom = new_y >= self.max_scroll() && self.max_scroll() > 0
            || self.total_height() <= self.viewport_height;
    }

    /// Jump to the bottom and re-engage auto-scroll.
    pub fn scroll_to_bottom(&mut self) {
        self.stick_to_bottom = true;
        let x = self.scroll_state.offset().x;
        self.scroll_state.set_offset(Position { x, y: self.max_scroll() });
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    fn clamp_scroll(&mut self) {
        let current = self.scroll_state.offset();
        let max_y = self.max_scroll();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }
}

impl EventHandler for MessageListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::CursorUp => self.scroll_by(-1),
            TuiEvent::CursorDown => self.scroll_by(1),
            TuiEvent::ScrollPageUp => self.scroll_by(-i32::from(self.viewport_height.max(1))),
            TuiEvent::ScrollPageDown => self.scroll_by(i32::from(self.viewport_height.max(1))),
            TuiEvent::ScrollToBottom => self.scroll_to_bottom(),
            _ => return None,
        }
        Some(())
    }
}

/// Transient render wrapper: transcript + loading flag as props, persistent
/// scroll state borrowed from TuiState.
pub struct MessageList<'a> {
    transcript: &'a Transcript,
    is_loading: bool,
    spinner_frame: usize,
    state: &'a mut MessageListState,
}

impl<'a> MessageList<'a> {
    pub fn new(
        transcript: &'a Transcript,
        is_loading: bool,
        spinner_frame: usize,
        state: &'a mut MessageListState,
    ) -> Self {
        Self {
            transcript,
            is_loading,
            spinner_frame,
            state,
        }
    }

    /// Compute bubble heights for the given content width, including the
    /// thinking indicator when a request is in flight.
    fn layout_heights(&self, content_width: u16) -> Vec<u16> {
        let mut heights: Vec<u16> = self
            .transcript
            .messages()
            .iter()
            .map(|m| MessageView::calculate_height(m, content_width))
            .collect();
        if self.is_loading {
            heights.push(THINKING_HEIGHT);
        }
        heights
    }

    fn thinking_paragraph(&self) -> Paragraph<'static> {
        let text = THINKING_FRAMES[self.spinner_frame % THINKING_FRAMES.len()];
        let style = Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC);
        Paragraph::new(text).style(style).block(
            Block::bordered()
                .title("assistant")
                .border_type(ratatui::widgets::BorderType::Rounded)
                .border_style(style)
                .title_style(style)
                .padding(Padding::horizontal(1)),
        )
    }
}

impl<'a> Component for MessageList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Reserve one column for the scrollbar.
        let content_width = area.width.saturating_sub(1);

        self.state.heights = self.layout_heights(content_width);
        self.state.viewport_height = area.height;

        let total_height = self.state.total_height();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (i, message) in self.transcript.messages().iter().enumerate() {
            let height = self.state.heights[i];
            let bubble_rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(MessageView::new(message), bubble_rect);
            y_offset += height;
        }

        if self.is_loading {
            let rect = Rect::new(0, y_offset, content_width, THINKING_HEIGHT);
            scroll_view.render_widget(self.thinking_paragraph(), rect);
        }

        if self.state.stick_to_bottom {
            self.state.scroll_to_bottom();
        }
        self.state.clamp_scroll();

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transcript::Message;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn transcript_of(contents: &[&str]) -> Transcript {
        let mut t = Transcript::new();
        for (i, c) in contents.iter().enumerate() {
            if i % 2 == 0 {
                t.push(Message::user(*c));
            } else {
                t.push(Message::assistant(*c, vec![]));
            }
        }
        t
    }

    fn render_to_text(
        transcript: &Transcript,
        is_loading: bool,
        state: &mut MessageListState,
        width: u16,
        height: u16,
    ) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut list = MessageList::new(transcript, is_loading, 0, state);
                list.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_render_shows_messages_in_order() {
        let transcript = transcript_of(&["first question", "first answer"]);
        let mut state = MessageListState::new();
        let text = render_to_text(&transcript, false, &mut state, 60, 20);

        let q = text.find("first question").unwrap();
        let a = text.find("first answer").unwrap();
        assert!(q < a, "user bubble renders above assistant bubble");
    }

    #[test]
    fn test_render_caches_one_height_per_message() {
        let transcript = transcript_of(&["one", "two", "three"]);
        let mut state = MessageListState::new();
        render_to_text(&transcript, false, &mut state, 60, 20);
        assert_eq!(state.heights.len(), 3);
        assert!(state.heights.iter().all(|&h| h >= 3));
    }

    #[test]
    fn test_thinking_indicator_only_while_loading() {
        let transcript = transcript_of(&["question"]);
        let mut state = MessageListState::new();

        let text = render_to_text(&transcript, true, &mut state, 60, 20);
        assert!(text.contains("Thinking"));
        assert_eq!(state.heights.len(), 2, "thinking bubble occupies layout");

        let text = render_to_text(&transcript, false, &mut state, 60, 20);
        assert!(!text.contains("Thinking"));
        assert_eq!(state.heights.len(), 1);
    }

    #[test]
    fn test_scroll_up_unpins_from_bottom() {
        let transcript = transcript_of(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let mut state = MessageListState::new();
        // 8 bubbles * 3 rows = 24 rows of content in a 10-row viewport.
        render_to_text(&transcript, false, &mut state, 60, 10);
        assert!(state.stick_to_bottom);
        assert!(state.scroll_state.offset().y > 0);

        state.handle_event(&TuiEvent::CursorUp);
        assert!(!state.stick_to_bottom);
    }

    #[test]
    fn test_scrolling_back_down_repins() {
        let transcript = transcript_of(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let mut state = MessageListState::new();
        render_to_text(&transcript, false, &mut state, 60, 10);

        state.handle_event(&TuiEvent::CursorUp);
        assert!(!state.stick_to_bottom);

        state.handle_event(&TuiEvent::CursorDown);
        assert!(state.stick_to_bottom, "reaching the bottom re-engages pinning");
    }

    #[test]
    fn test_scroll_to_bottom_event_repins() {
        let transcript = transcript_of(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let mut state = MessageListState::new();
        render_to_text(&transcript, false, &mut state, 60, 10);

        state.handle_event(&TuiEvent::ScrollPageUp);
        assert!(!state.stick_to_bottom);

        state.handle_event(&TuiEvent::ScrollToBottom);
        assert!(state.stick_to_bottom);
        assert_eq!(state.scroll_state.offset().y, state.max_scroll());
    }

    #[test]
    fn test_unrelated_events_are_ignored() {
        let mut state = MessageListState::new();
        assert!(state.handle_event(&TuiEvent::InputChar('x')).is_none());
        assert!(state.handle_event(&TuiEvent::Submit).is_none());
    }
}
