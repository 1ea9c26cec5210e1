//! State Management
//!
//! Session, chat, and UI-notice stores backed by Leptos signals.

pub mod chat;
pub mod session;
pub mod ui;

pub use chat::{ChatMessage, ChatState, MessageRole};
pub use session::SessionState;
pub use ui::UiState;

use leptos::provide_context;

/// Provide all stores to the component tree
pub fn provide_stores() {
    provide_context(SessionState::new());
    provide_context(ChatState::new());
    provide_context(UiState::new());
}
