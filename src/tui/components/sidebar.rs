//! # Sidebar Component
//!
//! Left-hand panel with branding, key hints, and the backend health line.
//! Purely presentational - the new-chat action itself is a key binding
//! (Ctrl+N) handled by the event loop; the sidebar just advertises it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::tui::component::Component;

/// Fixed sidebar width, including its border.
pub const SIDEBAR_WIDTH: u16 = 28;

/// Stateless sidebar.
///
/// # Props
///
/// - `backend_healthy`: `None` while the startup probe is still running,
///   then the probe's verdict.
pub struct Sidebar {
    pub backend_healthy: Option<bool>,
}

impl Sidebar {
    pub fn new(backend_healthy: Option<bool>) -> Self {
        Self { backend_healthy }
    }

    fn health_line(&self) -> Line<'static> {
        match self.backend_healthy {
            None => Line::from(Span::styled(
                "backend: checking...",
                Style::default().fg(Color::DarkGray),
            )),
            Some(true) => Line::from(Span::styled(
                "backend: ok",
                Style::default().fg(Color::Green),
            )),
            Some(false) => Line::from(Span::styled(
                "backend: unreachable",
                Style::default().fg(Color::Red),
            )),
        }
    }
}

impl Component for Sidebar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(Color::DarkGray);

        let mut lines = vec![
            Line::from(Span::styled("AbiaCS Assistant", title_style)),
            Line::from(Span::styled("Abia State Civil Service AI", dim)),
            Line::from(""),
            Line::from(vec![
                Span::styled("Ctrl+N", Style::default().fg(Color::Yellow)),
                Span::raw("  new chat"),
            ]),
            Line::from(vec![
                Span::styled("Enter ", Style::default().fg(Color::Yellow)),
                Span::raw("  send"),
            ]),
            Line::from(vec![
                Span::styled("Ctrl+J", Style::default().fg(Color::Yellow)),
                Span::raw("  newline"),
            ]),
            Line::from(vec![
                Span::styled("Esc   ", Style::default().fg(Color::Yellow)),
                Span::raw("  quit"),
            ]),
            Line::from(""),
            self.health_line(),
        ];

        // Footer pinned to the bottom edge of the panel.
        let inner_height = area.height.saturating_sub(2);
        let body_height = lines.len() as u16;
        for _ in body_height..inner_height.saturating_sub(1) {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled("Powered by RAG + Claude", dim)));

        let panel = Paragraph::new(lines).block(
            Block::bordered()
                .border_type(ratatui::widgets::BorderType::Rounded)
                .border_style(dim)
                .padding(Padding::horizontal(1)),
        );

        frame.render_widget(panel, area);
    }
}
