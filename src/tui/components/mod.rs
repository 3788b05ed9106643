//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns live here:
//!
//! - **Stateless components** receive everything as props and just render:
//!   `TitleBar`, `Sidebar`, `MessageView`.
//! - **Stateful components** keep persistent state across frames and emit
//!   high-level events: `InputBox`, `MessageListState`/`MessageList`,
//!   `SuggestionsState`/`Suggestions`.
//!
//! The stateful ones follow the persistent-state + transient-wrapper split:
//! the `*State` struct lives in `TuiState` for the life of the session, and
//! a borrowing wrapper is created each frame with the current props. Each
//! component file contains its state types, event types, rendering logic,
//! and tests.

pub mod input_box;
pub mod message;
pub mod message_list;
pub mod sidebar;
pub mod suggestions;
pub mod title_bar;

pub use input_box::{InputBox, InputEvent};
pub use message::MessageView;
pub use message_list::{MessageList, MessageListState};
pub use sidebar::{SIDEBAR_WIDTH, Sidebar};
pub use suggestions::{SuggestionEvent, Suggestions, SuggestionsState};
pub use title_bar::TitleBar;
