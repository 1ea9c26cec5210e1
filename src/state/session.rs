//! Session Token Store
//!
//! Holds the bearer token for the logged-in session, mirrored 1:1 into
//! local storage so a reload keeps the user signed in. Backend token
//! errors are translated here into a cleared session and a redirect to
//! the login page.

use leptos::*;

use crate::api::client::ApiError;
use crate::state::ui::UiState;
use crate::storage;

/// Local storage key for the session token
pub const TOKEN_STORAGE_KEY: &str = "authToken";

/// Session state provided to all components
#[derive(Clone, Copy)]
pub struct SessionState {
    /// Bearer token for the current session, `None` when logged out
    pub token: RwSignal<Option<String>>,
    /// Set when the backend invalidated the session; the router watches
    /// this and sends the user back to the login page
    pub expired: RwSignal<bool>,
}

/// Backend token error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenErrorKind {
    /// `token_missing`: request needed a token but none was sent
    Missing,
    /// `token_expired`: the session timed out server-side
    Expired,
    /// `invalid_token`: the token was rejected
    Invalid,
    /// Anything else; not a token problem
    Other,
}

impl TokenErrorKind {
    /// Map a backend error code string to a token error kind
    pub fn classify(code: &str) -> Self {
        match code {
            "token_missing" => Self::Missing,
            "token_expired" => Self::Expired,
            "invalid_token" => Self::Invalid,
            _ => Self::Other,
        }
    }

    /// Whether this error invalidates the stored token
    pub fn clears_token(self) -> bool {
        !matches!(self, Self::Other)
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            token: create_rw_signal(None),
            expired: create_rw_signal(false),
        }
    }

    /// Whether a session token is currently held (reactive)
    pub fn is_logged_in(&self) -> bool {
        self.token.with(|t| t.is_some())
    }

    /// Store a token in memory and local storage
    pub fn set_token(&self, token: &str) {
        self.token.set(Some(token.to_string()));
        storage::set(TOKEN_STORAGE_KEY, token);
    }

    /// Drop the token from memory and local storage
    pub fn clear_token(&self) {
        self.token.set(None);
        storage::remove(TOKEN_STORAGE_KEY);
    }

    /// Restore a previously stored token at startup
    pub fn initialize(&self) {
        if let Some(token) = storage::get(TOKEN_STORAGE_KEY) {
            self.set_token(&token);
        }
    }

    /// Translate a backend error into session state changes.
    ///
    /// Token errors clear the session; expired/invalid ones additionally
    /// notify the user and flag a redirect to `/login`. Every other code
    /// is logged and otherwise left to the caller.
    pub fn handle_token_error(&self, ui: &UiState, err: &ApiError) {
        let kind = TokenErrorKind::classify(&err.error);
        if kind.clears_token() {
            self.clear_token();
        }
        match kind {
            TokenErrorKind::Expired | TokenErrorKind::Invalid => {
                ui.show_error("Your session has expired. Please log in again.");
                self.expired.set(true);
            }
            TokenErrorKind::Other => {
                web_sys::console::error_1(
                    &format!("API error: {}", err.message.as_deref().unwrap_or(&err.error)).into(),
                );
            }
            TokenErrorKind::Missing => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_token_codes() {
        assert_eq!(TokenErrorKind::classify("token_missing"), TokenErrorKind::Missing);
        assert_eq!(TokenErrorKind::classify("token_expired"), TokenErrorKind::Expired);
        assert_eq!(TokenErrorKind::classify("invalid_token"), TokenErrorKind::Invalid);
        assert_eq!(TokenErrorKind::classify("rate_limited"), TokenErrorKind::Other);
        assert_eq!(TokenErrorKind::classify(""), TokenErrorKind::Other);
    }

    #[test]
    fn test_only_token_codes_clear_the_session() {
        assert!(TokenErrorKind::classify("token_missing").clears_token());
        assert!(TokenErrorKind::classify("token_expired").clears_token());
        assert!(TokenErrorKind::classify("invalid_token").clears_token());
        assert!(!TokenErrorKind::classify("bad_request").clears_token());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn set_then_clear_leaves_memory_and_storage_empty() {
        let runtime = create_runtime();

        let session = SessionState::new();
        session.set_token("abc123");
        assert_eq!(storage::get(TOKEN_STORAGE_KEY).as_deref(), Some("abc123"));

        session.clear_token();
        assert!(session.token.get_untracked().is_none());
        assert!(storage::get(TOKEN_STORAGE_KEY).is_none());

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn initialize_restores_stored_token() {
        let runtime = create_runtime();

        storage::set(TOKEN_STORAGE_KEY, "persisted");
        let session = SessionState::new();
        session.initialize();
        assert_eq!(session.token.get_untracked().as_deref(), Some("persisted"));

        storage::remove(TOKEN_STORAGE_KEY);
        runtime.dispose();
    }
}
