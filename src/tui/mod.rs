//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (request in flight): draws every ~120ms so the thinking
//!   indicator keeps moving.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Background I/O
//!
//! Network calls never run on the event loop. Effects returned by the
//! reducer spawn tokio tasks that post their outcome back through a std
//! mpsc channel as `Action`s, drained once per loop iteration. Each chat
//! request task carries the generation it was dispatched with, so a reply
//! that outlives its conversation is recognized and dropped by the reducer.

mod component;
mod components;
mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::api::{ApiClient, ChatBackend};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    InputBox, InputEvent, MessageListState, SuggestionEvent, Suggestions, SuggestionsState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub message_list: MessageListState,
    pub input_box: InputBox,
    pub suggestions: SuggestionsState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
            suggestions: SuggestionsState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Keyboard enhancement is requested unconditionally: terminals that
        // don't support it ignore the sequence, and with it Shift+Enter
        // becomes distinguishable from Enter.
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Build the HTTP client and run the UI until the user quits.
pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend: Arc<dyn ChatBackend> = Arc::new(ApiClient::new(
        config.api_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    ));
    run_app(backend)
}

fn run_app(backend: Arc<dyn ChatBackend>) -> std::io::Result<()> {
    let mut app = App::new(backend);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions coming back from background tasks
    let (tx, rx) = mpsc::channel();

    // Suggestions and the health probe are fetched once, off the loop
    spawn_startup_fetches(&app, &tx);

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync component props with app state
        tui.input_box.disabled = app.is_loading;

        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 2.5) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while animating, long when idle
        let timeout = if animating {
            Duration::from_millis(120)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        // Process first event + drain everything pending before the next draw
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(tui_event, TuiEvent::Resize) {
                continue;
            }

            if matches!(tui_event, TuiEvent::ForceQuit | TuiEvent::Quit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            if matches!(tui_event, TuiEvent::NewChat) {
                let effect = update(&mut app, Action::NewChat);
                dispatch_effect(effect, &app, &tx);
                // Fresh thread, fresh presentation state
                tui.message_list = MessageListState::new();
                tui.suggestions.clear_selection();
                tui.input_box.disabled = app.is_loading;
                continue;
            }

            // Landing mode: while the transcript and input buffer are both
            // empty, arrows and Enter drive the suggestion list. A chosen
            // question goes through the same Submit action as typed text.
            let on_landing = app.transcript.is_empty() && tui.input_box.buffer.is_empty();
            if on_landing
                && matches!(
                    tui_event,
                    TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::Submit
                )
            {
                let mut chips = Suggestions::new(&app.suggested_questions, &mut tui.suggestions);
                if let Some(SuggestionEvent::Choose(question)) = chips.handle_event(&tui_event) {
                    let effect = update(&mut app, Action::Submit(question));
                    dispatch_effect(effect, &app, &tx);
                    tui.suggestions.clear_selection();
                    tui.input_box.disabled = app.is_loading;
                }
                continue;
            }

            // Scrollback for the transcript
            if matches!(
                tui_event,
                TuiEvent::CursorUp
                    | TuiEvent::CursorDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
                    | TuiEvent::ScrollToBottom
            ) {
                tui.message_list.handle_event(&tui_event);
                continue;
            }

            // Everything else belongs to the input box
            if let Some(InputEvent::Submit(text)) = tui.input_box.handle_event(&tui_event) {
                let effect = update(&mut app, Action::Submit(text));
                dispatch_effect(effect, &app, &tx);
                tui.input_box.disabled = app.is_loading;
            }
        }

        if should_quit {
            break;
        }

        // Handle actions posted by background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            let effect = update(&mut app, action);
            dispatch_effect(effect, &app, &tx);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Perform the I/O an `update()` asked for.
fn dispatch_effect(effect: Effect, app: &App, tx: &mpsc::Sender<Action>) {
    match effect {
        Effect::SendMessage {
            text,
            conversation_id,
            generation,
        } => spawn_chat_request(app.backend.clone(), text, conversation_id, generation, tx.clone()),
        Effect::None | Effect::Quit => {}
    }
}

/// Fire the one chat request the loading flag allows, posting the outcome
/// (tagged with its generation) back to the event loop.
fn spawn_chat_request(
    backend: Arc<dyn ChatBackend>,
    text: String,
    conversation_id: Option<String>,
    generation: u64,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning chat request (generation {generation})");
    tokio::spawn(async move {
        let result = backend
            .send_message(&text, conversation_id.as_deref())
            .await
            .map_err(|e| e.to_string());
        if tx.send(Action::ResponseArrived { generation, result }).is_err() {
            warn!("Failed to deliver chat response: receiver dropped");
        }
    });
}

/// One-shot startup tasks: suggested questions and the health probe. Both
/// are non-critical - their backend calls never fail, they just resolve to
/// an empty list / `false`.
fn spawn_startup_fetches(app: &App, tx: &mpsc::Sender<Action>) {
    let backend = app.backend.clone();
    let tx_suggestions = tx.clone();
    tokio::spawn(async move {
        let questions = backend.fetch_suggested_questions().await;
        if tx_suggestions.send(Action::SuggestionsLoaded(questions)).is_err() {
            warn!("Failed to deliver suggested questions: receiver dropped");
        }
    });

    let backend = app.backend.clone();
    let tx_health = tx.clone();
    tokio::spawn(async move {
        let healthy = backend.check_health().await;
        if tx_health.send(Action::HealthChecked(healthy)).is_err() {
            warn!("Failed to deliver health status: receiver dropped");
        }
    });
}
