//! Local Storage Helpers
//!
//! Thin wrappers around the browser's `localStorage`. All stores mirror
//! their state through these so in-memory signals and storage stay 1:1.

/// Read a value from local storage, `None` if absent or unavailable.
pub fn get(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}

/// Write a value to local storage. Failures (storage disabled, quota) are ignored.
pub fn set(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Remove a key from local storage.
pub fn remove(key: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
