//! HTTP API Client
//!
//! Functions for communicating with the DCU Chat backend. Every request
//! carries the session bearer token when one is held, runs under a fixed
//! timeout, and routes backend token errors through the session store
//! before surfacing them to the caller.

use gloo_net::http::Request;
use leptos::SignalGetUntracked;
use serde::de::DeserializeOwned;

use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::storage;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Local storage key overriding the API base URL
pub const API_BASE_STORAGE_KEY: &str = "dcu_api_url";

/// Per-request timeout in milliseconds
const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = storage::get(API_BASE_STORAGE_KEY).unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    normalize_base(url)
}

/// Normalize a base URL: remove trailing slash
fn normalize_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Error body returned by the backend: `{"error": <code>, "message": <text>}`
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiError {
    /// Text suitable for showing the user
    pub fn display(&self) -> &str {
        self.message.as_deref().unwrap_or(&self.error)
    }
}

/// POST a JSON body and parse a JSON response.
///
/// Request side attaches `Authorization: Bearer <token>` when a token is
/// present; response side hands non-2xx error bodies to the session store
/// for token-error translation, then returns the message to the caller.
async fn post_json<B, T>(
    session: SessionState,
    ui: UiState,
    path: &str,
    body: &B,
) -> Result<T, String>
where
    B: serde::Serialize,
    T: DeserializeOwned,
{
    let url = format!("{}{}", get_api_base(), path);

    // Fixed per-request timeout: abort the fetch if the timer fires first.
    let controller = web_sys::AbortController::new().ok();
    let signal = controller.as_ref().map(|c| c.signal());
    let timer = controller.clone().map(|c| {
        gloo_timers::callback::Timeout::new(REQUEST_TIMEOUT_MS, move || c.abort())
    });

    let mut builder = Request::post(&url).abort_signal(signal.as_ref());

    if let Some(token) = session.token.get_untracked() {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let result = builder
        .json(body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await;

    // Dropping the timer cancels the pending abort.
    drop(timer);

    let response = result.map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "unknown_error".to_string(),
            message: None,
        });
        session.handle_token_error(&ui, &error);
        return Err(error.display().to_string());
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

// ============ API Functions ============

/// Log in and obtain a session token
pub async fn login(
    session: SessionState,
    ui: UiState,
    username: &str,
    password: &str,
) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        username: String,
        password: String,
    }

    #[derive(serde::Deserialize)]
    struct LoginResponse {
        token: String,
    }

    let response: LoginResponse = post_json(
        session,
        ui,
        "/auth/login",
        &LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        },
    )
    .await?;

    Ok(response.token)
}

/// Create a new account
pub async fn register(
    session: SessionState,
    ui: UiState,
    username: &str,
    password: &str,
    nickname: &str,
) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct RegisterRequest {
        username: String,
        password: String,
        nickname: String,
    }

    #[derive(serde::Deserialize)]
    struct RegisterResponse {}

    let _: RegisterResponse = post_json(
        session,
        ui,
        "/auth/register",
        &RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
            nickname: nickname.to_string(),
        },
    )
    .await?;

    Ok(())
}

/// Send a chat message and receive the assistant's reply
pub async fn send_message(
    session: SessionState,
    ui: UiState,
    message: &str,
) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct ChatRequest {
        message: String,
    }

    #[derive(serde::Deserialize)]
    struct ChatResponse {
        reply: String,
    }

    let response: ChatResponse = post_json(
        session,
        ui,
        "/chat",
        &ChatRequest {
            message: message.to_string(),
        },
    )
    .await?;

    Ok(response.reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_strips_trailing_slash() {
        assert_eq!(
            normalize_base("http://localhost:8000/api/".to_string()),
            "http://localhost:8000/api"
        );
        assert_eq!(
            normalize_base("http://localhost:8000/api".to_string()),
            "http://localhost:8000/api"
        );
    }

    #[test]
    fn test_api_error_parses_with_and_without_message() {
        let err: ApiError =
            serde_json::from_str(r#"{"error":"token_expired","message":"expired"}"#).unwrap();
        assert_eq!(err.error, "token_expired");
        assert_eq!(err.display(), "expired");

        let bare: ApiError = serde_json::from_str(r#"{"error":"invalid_token"}"#).unwrap();
        assert_eq!(bare.display(), "invalid_token");
    }
}
