//! Chat Message Cache
//!
//! Ordered chat transcript mirrored into local storage. The persisted
//! envelope carries an expiry timestamp for the next local midnight, so
//! yesterday's conversation is discarded on the first load of a new day.

use chrono::{DateTime, Local, LocalResult, NaiveDateTime, NaiveTime, TimeZone};
use leptos::*;
use serde::{Deserialize, Serialize};

use crate::storage;

/// Local storage key for the persisted transcript
pub const CHAT_STORAGE_KEY: &str = "dcu_chat_messages";

/// Which side of the conversation a message belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Bot,
}

/// A single chat message
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    /// Send time, Unix milliseconds
    pub timestamp: i64,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            timestamp: Local::now().timestamp_millis(),
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Bot,
            content: content.into(),
            timestamp: Local::now().timestamp_millis(),
        }
    }
}

/// Persisted envelope: `{"data": [...], "expiry": <unix ms>}`
#[derive(Debug, Serialize, Deserialize)]
pub struct StoredMessages {
    pub data: Vec<ChatMessage>,
    pub expiry: i64,
}

impl StoredMessages {
    /// Messages still live at `now_ms`, or `None` once the expiry has passed
    pub fn into_live(self, now_ms: i64) -> Option<Vec<ChatMessage>> {
        if self.expiry > now_ms {
            Some(self.data)
        } else {
            None
        }
    }
}

/// Unix milliseconds of 00:00:00 on the calendar day after `now`.
///
/// Generic over the time zone so the arithmetic is testable with a fixed
/// offset; the app always passes `Local`. A midnight skipped by a DST
/// transition resolves to the earliest valid instant after it.
pub fn next_midnight_millis<Tz: TimeZone>(now: DateTime<Tz>) -> i64 {
    let tomorrow = match now.date_naive().succ_opt() {
        Some(day) => day,
        None => return now.timestamp_millis(),
    };
    let midnight = NaiveDateTime::new(tomorrow, NaiveTime::MIN);
    match midnight.and_local_timezone(now.timezone()) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.timestamp_millis(),
        LocalResult::None => now.timestamp_millis() + 24 * 60 * 60 * 1000,
    }
}

/// Chat state provided to all components
#[derive(Clone, Copy)]
pub struct ChatState {
    /// Transcript in send order
    pub messages: RwSignal<Vec<ChatMessage>>,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            messages: create_rw_signal(Vec::new()),
        }
    }

    /// Load the persisted transcript, discarding it once expired
    pub fn load(&self) {
        let stored = storage::get(CHAT_STORAGE_KEY)
            .and_then(|raw| serde_json::from_str::<StoredMessages>(&raw).ok());

        let now_ms = Local::now().timestamp_millis();
        match stored.and_then(|s| s.into_live(now_ms)) {
            Some(data) => self.messages.set(data),
            None => self.clear(),
        }
    }

    /// Persist the transcript with a fresh next-midnight expiry
    pub fn save(&self) {
        let envelope = StoredMessages {
            data: self.messages.get_untracked(),
            expiry: next_midnight_millis(Local::now()),
        };
        if let Ok(json) = serde_json::to_string(&envelope) {
            storage::set(CHAT_STORAGE_KEY, &json);
        }
    }

    /// Append a message and persist immediately
    pub fn append(&self, message: ChatMessage) {
        self.messages.update(|m| m.push(message));
        self.save();
    }

    /// Empty the transcript and remove the storage key
    pub fn clear(&self) {
        self.messages.set(Vec::new());
        storage::remove(CHAT_STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn kst() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    #[test]
    fn test_next_midnight_is_start_of_following_day() {
        let now = kst().with_ymd_and_hms(2025, 3, 14, 15, 30, 45).unwrap();
        let expected = kst().with_ymd_and_hms(2025, 3, 15, 0, 0, 0).unwrap();
        assert_eq!(next_midnight_millis(now), expected.timestamp_millis());
    }

    #[test]
    fn test_next_midnight_crosses_month_and_year() {
        let jan_31 = kst().with_ymd_and_hms(2025, 1, 31, 23, 59, 59).unwrap();
        let feb_1 = kst().with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
        assert_eq!(next_midnight_millis(jan_31), feb_1.timestamp_millis());

        let dec_31 = kst().with_ymd_and_hms(2025, 12, 31, 8, 0, 0).unwrap();
        let jan_1 = kst().with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(next_midnight_millis(dec_31), jan_1.timestamp_millis());
    }

    #[test]
    fn test_next_midnight_at_midnight_is_a_full_day_away() {
        // Saving exactly at midnight keeps the transcript for the whole day.
        let midnight = kst().with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let next = kst().with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap();
        assert_eq!(next_midnight_millis(midnight), next.timestamp_millis());
    }

    #[test]
    fn test_into_live_keeps_unexpired_data() {
        let stored = StoredMessages {
            data: vec![ChatMessage {
                role: MessageRole::User,
                content: "hello".to_string(),
                timestamp: 1_000,
            }],
            expiry: 10_000,
        };
        let live = stored.into_live(9_999).unwrap();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].content, "hello");
    }

    #[test]
    fn test_into_live_evicts_at_and_after_expiry() {
        let stored = |expiry| StoredMessages { data: Vec::new(), expiry };
        assert!(stored(10_000).into_live(10_000).is_none());
        assert!(stored(10_000).into_live(10_001).is_none());
    }

    #[test]
    fn test_envelope_field_names() {
        let envelope = StoredMessages {
            data: vec![ChatMessage {
                role: MessageRole::Bot,
                content: "hi".to_string(),
                timestamp: 42,
            }],
            expiry: 99,
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert!(value.get("data").is_some());
        assert_eq!(value["expiry"], 99);
        assert_eq!(value["data"][0]["role"], "bot");

        let parsed: StoredMessages =
            serde_json::from_str(r#"{"data":[],"expiry":123}"#).unwrap();
        assert_eq!(parsed.expiry, 123);
        assert!(parsed.data.is_empty());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn load_discards_expired_transcript_and_removes_key() {
        let runtime = create_runtime();

        let expired = StoredMessages {
            data: vec![ChatMessage::user("stale")],
            expiry: 1,
        };
        storage::set(CHAT_STORAGE_KEY, &serde_json::to_string(&expired).unwrap());

        let chat = ChatState::new();
        chat.load();
        assert!(chat.messages.get_untracked().is_empty());
        assert!(storage::get(CHAT_STORAGE_KEY).is_none());

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn append_persists_with_next_midnight_expiry() {
        let runtime = create_runtime();

        let chat = ChatState::new();
        chat.clear();
        chat.append(ChatMessage::user("first"));

        let raw = storage::get(CHAT_STORAGE_KEY).unwrap();
        let stored: StoredMessages = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored.data.last().unwrap().content, "first");
        assert!(stored.expiry > Local::now().timestamp_millis());

        chat.clear();
        runtime.dispose();
    }
}
