//! Top-level layout: sidebar on the left, then title bar / transcript /
//! input box stacked in the main column. An empty transcript renders the
//! landing state (greeting + suggested questions) instead of the list.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    MessageList, SIDEBAR_WIDTH, Sidebar, Suggestions, TitleBar,
};

/// Greeting shown above the suggestions on the landing screen.
const LANDING_BLURB: &str = "Ask any question about Abia State Civil Service rules, \
regulations, promotions, leave, pensions, and more.";

/// Cap on landing text width so the blurb stays readable on wide terminals.
const LANDING_TEXT_WIDTH: u16 = 60;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let [sidebar_area, main_area] =
        Layout::horizontal([Length(SIDEBAR_WIDTH), Min(0)]).areas(frame.area());

    Sidebar::new(app.backend_healthy).render(frame, sidebar_area);

    let input_height = tui.input_box.calculate_height(main_area.width);
    let [title_area, content_area, input_area] =
        Layout::vertical([Length(1), Min(0), Length(input_height)]).areas(main_area);

    TitleBar::new(app.conversation_id.clone(), app.status_message.clone())
        .render(frame, title_area);

    if app.transcript.is_empty() {
        draw_landing(frame, content_area, app, tui);
    } else {
        MessageList::new(
            &app.transcript,
            app.is_loading,
            spinner_frame,
            &mut tui.message_list,
        )
        .render(frame, content_area);
    }

    tui.input_box.render(frame, input_area);
}

/// Empty-state view: centered greeting with the suggestion list below it.
fn draw_landing(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::Length;

    let text_width = area.width.min(LANDING_TEXT_WIDTH);
    let blurb_height = wrapped_height(LANDING_BLURB, text_width);
    let suggestions_height = Suggestions::required_height(&app.suggested_questions);

    let [greeting_area, _, suggestions_area] = Layout::vertical([
        Length(2 + blurb_height),
        Length(1), // Spacer
        Length(suggestions_height),
    ])
    .flex(Flex::Center)
    .areas(area);

    let greeting = vec![
        Line::from(Span::styled(
            "AbiaCS Assistant",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(LANDING_BLURB),
    ];

    let [greeting_area] = Layout::horizontal([Length(text_width)])
        .flex(Flex::Center)
        .areas(greeting_area);

    frame.render_widget(
        Paragraph::new(greeting)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        greeting_area,
    );

    Suggestions::new(&app.suggested_questions, &mut tui.suggestions)
        .render(frame, suggestions_area);
}

/// Wrapped line count for centered landing text.
fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    (textwrap::wrap(text, width as usize).len() as u16).max(1)
}
