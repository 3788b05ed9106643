//! # Suggested Questions Component
//!
//! Shortcut prompts shown on the landing screen before the first message.
//! Renders nothing at all when the list is empty (the fetch failed or the
//! backend offers none) - the chat works fine without it.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SuggestionsState` lives in `TuiState`
//! - `Suggestions` is created each frame with borrowed state and the
//!   question list as a prop
//!
//! Choosing a suggestion emits the question text; the event loop feeds it
//! into the exact same submit path as typed input, so the loading guard
//! applies identically.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Persistent selection state for the suggestion list.
#[derive(Default)]
pub struct SuggestionsState {
    pub selected: Option<usize>,
    pub list_state: ListState,
}

impl SuggestionsState {
    pub fn new() -> Self {
        Self::default()
    }

    fn select(&mut self, index: Option<usize>) {
        self.selected = index;
        self.list_state.select(index);
    }

    /// Drop the highlight (e.g. when the user starts typing instead).
    pub fn clear_selection(&mut self) {
        self.select(None);
    }
}

/// Event emitted when the user picks a suggestion.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionEvent {
    Choose(String),
}

/// Transient render/event wrapper around the question list.
pub struct Suggestions<'a> {
    questions: &'a [String],
    state: &'a mut SuggestionsState,
}

impl<'a> Suggestions<'a> {
    pub fn new(questions: &'a [String], state: &'a mut SuggestionsState) -> Self {
        Self { questions, state }
    }

    /// Rows this component occupies: a header, a blank, and one per question.
    /// Zero when there is nothing to show.
    pub fn required_height(questions: &[String]) -> u16 {
        if questions.is_empty() {
            0
        } else {
            questions.len() as u16 + 2
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.questions.is_empty() || area.height == 0 {
            return;
        }

        let header = Paragraph::new("Try asking about:")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        let header_area = Rect { height: 1, ..area };
        frame.render_widget(header, header_area);

        let list_area = Rect {
            y: area.y + 2,
            height: area.height.saturating_sub(2),
            ..area
        };

        let items: Vec<ListItem> = self
            .questions
            .iter()
            .map(|q| ListItem::new(Line::from(q.as_str()).centered()))
            .collect();

        let list = List::new(items)
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            );

        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }
}

impl<'a> EventHandler for Suggestions<'a> {
    type Event = SuggestionEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SuggestionEvent> {
        if self.questions.is_empty() {
            return None;
        }

        match event {
            TuiEvent::CursorUp => {
                let next = match self.state.selected {
                    Some(0) | None => self.questions.len() - 1,
                    Some(i) => i - 1,
                };
                self.state.select(Some(next));
                None
            }
            TuiEvent::CursorDown => {
                let next = match self.state.selected {
                    Some(i) if i + 1 < self.questions.len() => i + 1,
                    Some(_) => 0,
                    None => 0,
                };
                self.state.select(Some(next));
                None
            }
            TuiEvent::Submit => self
                .state
                .selected
                .and_then(|i| self.questions.get(i))
                .map(|q| SuggestionEvent::Choose(q.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn questions() -> Vec<String> {
        vec![
            "How do I apply for annual leave?".to_string(),
            "What are the salary grade levels?".to_string(),
            "What is the probation period?".to_string(),
        ]
    }

    #[test]
    fn test_required_height_zero_when_empty() {
        assert_eq!(Suggestions::required_height(&[]), 0);
        assert_eq!(Suggestions::required_height(&questions()), 5);
    }

    #[test]
    fn test_renders_nothing_when_empty() {
        let backend = TestBackend::new(50, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = SuggestionsState::new();
        let empty: Vec<String> = Vec::new();

        terminal
            .draw(|f| Suggestions::new(&empty, &mut state).render(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert_eq!(text.trim(), "", "empty suggestion list draws nothing");
    }

    #[test]
    fn test_renders_header_and_questions() {
        let backend = TestBackend::new(50, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = SuggestionsState::new();
        let qs = questions();

        terminal
            .draw(|f| Suggestions::new(&qs, &mut state).render(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Try asking about:"));
        assert!(text.contains("How do I apply for annual leave?"));
        assert!(text.contains("What is the probation period?"));
    }

    #[test]
    fn test_arrow_keys_cycle_selection() {
        let qs = questions();
        let mut state = SuggestionsState::new();
        let mut chips = Suggestions::new(&qs, &mut state);

        chips.handle_event(&TuiEvent::CursorDown);
        assert_eq!(chips.state.selected, Some(0));

        chips.handle_event(&TuiEvent::CursorDown);
        chips.handle_event(&TuiEvent::CursorDown);
        assert_eq!(chips.state.selected, Some(2));

        // Wraps around
        chips.handle_event(&TuiEvent::CursorDown);
        assert_eq!(chips.state.selected, Some(0));

        chips.handle_event(&TuiEvent::CursorUp);
        assert_eq!(chips.state.selected, Some(2));
    }

    #[test]
    fn test_enter_chooses_selected_question() {
        let qs = questions();
        let mut state = SuggestionsState::new();
        let mut chips = Suggestions::new(&qs, &mut state);

        assert_eq!(chips.handle_event(&TuiEvent::Submit), None, "no selection yet");

        chips.handle_event(&TuiEvent::CursorDown);
        chips.handle_event(&TuiEvent::CursorDown);
        let chosen = chips.handle_event(&TuiEvent::Submit);
        assert_eq!(
            chosen,
            Some(SuggestionEvent::Choose(
                "What are the salary grade levels?".to_string()
            ))
        );
    }

    #[test]
    fn test_events_ignored_when_list_empty() {
        let mut state = SuggestionsState::new();
        let empty: Vec<String> = Vec::new();
        let mut chips = Suggestions::new(&empty, &mut state);

        assert_eq!(chips.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(chips.state.selected, None);
    }
}
