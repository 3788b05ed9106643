use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::core::transcript::{Message, Role};
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// Separator between source labels on the chip line.
const SOURCE_SEPARATOR: &str = " · ";

/// A stateless component that renders a single chat bubble with
/// role-based styling and an optional line of source chips.
///
/// `MessageView` is a transient component: created fresh each frame with the
/// data it needs to render, holding no mutable state.
///
/// # Styling
///
/// - **User** (green): questions from the human, titled `you`
/// - **Assistant** (blue): answers from the backend, titled `assistant`
///
/// Source labels render below the answer text as a single dim wrapped line,
/// e.g. `sources: Rule 12 · Rule 3`.
///
/// # Height Calculation
///
/// [`calculate_height`](Self::calculate_height) predicts rendered height
/// using `textwrap` with options that match Ratatui's `Paragraph` wrapping
/// behavior. This lets the parent `MessageList` lay out scroll positions
/// without actually rendering each bubble.
#[derive(Clone, Copy)]
pub struct MessageView<'a> {
    /// The message to render
    pub message: &'a Message,
}

impl<'a> MessageView<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self { message }
    }

    fn sources_text(message: &Message) -> Option<String> {
        if message.sources.is_empty() {
            return None;
        }
        Some(format!("sources: {}", message.sources.join(SOURCE_SEPARATOR)))
    }

    /// Number of wrapped lines `text` occupies at `content_width`.
    fn wrapped_lines(text: &str, content_width: u16) -> u16 {
        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);
        (textwrap::wrap(text, options).len() as u16).max(1)
    }

    /// Calculate the height required for this message given a width.
    ///
    /// Uses `textwrap` to predict the height *without* rendering, avoiding a
    /// circular dependency: the scroll view needs heights up front, but
    /// rendering is what would produce them.
    pub fn calculate_height(message: &Message, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Terminal too narrow for borders + padding. Return 1 row so the
            // message still occupies space in the layout.
            return 1;
        }

        let content = message.content.trim();
        if content.is_empty() && message.sources.is_empty() {
            return VERTICAL_OVERHEAD;
        }

        let mut height = VERTICAL_OVERHEAD;
        if !content.is_empty() {
            height += Self::wrapped_lines(content, content_width);
        }
        if let Some(sources) = Self::sources_text(message) {
            height += Self::wrapped_lines(&sources, content_width);
        }
        height
    }
}

impl<'a> Widget for MessageView<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let (role, style) = match self.message.role {
            Role::User => ("you", Style::default().fg(Color::Green)),
            Role::Assistant => ("assistant", Style::default().fg(Color::Blue)),
        };
        let border_style = style.add_modifier(Modifier::DIM);

        let block = Block::bordered()
            .title(role)
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let content = self.message.content.trim();
        let content_height = if content.is_empty() {
            0
        } else {
            Self::wrapped_lines(content, inner_area.width)
        };

        let content_area = Rect {
            height: content_height.min(inner_area.height),
            ..inner_area
        };
        Paragraph::new(content)
            .style(style)
            .wrap(Wrap { trim: true })
            .render(content_area, buf);

        if let Some(sources) = Self::sources_text(self.message) {
            let sources_area = Rect {
                y: inner_area.y + content_height,
                height: inner_area
                    .height
                    .saturating_sub(content_height),
                ..inner_area
            };
            if sources_area.height > 0 {
                let chip_style = Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC);
                Paragraph::new(Line::from(Span::styled(sources, chip_style)))
                    .wrap(Wrap { trim: true })
                    .render(sources_area, buf);
            }
        }
    }
}

/// Component trait implementation.
///
/// `MessageView` is stateless, so the `&mut self` required by the trait is a
/// no-op; rendering is delegated to the [`Widget`] implementation.
impl<'a> Component for MessageView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
