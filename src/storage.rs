//! Thin wrapper over `localStorage`.
//!
//! Storage can be absent or blocked (private browsing, embedded webviews).
//! Reads then fall back to `None` and writes become no-ops; the app keeps
//! working with in-memory state only.

pub fn read(key: &str) -> Option<String> {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(value) = storage.get_item(key) {
                return value;
            }
        }
    }
    None
}

pub fn write(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if storage.set_item(key, value).is_ok() {
                return;
            }
        }
    }
    log::warn!("localStorage unavailable, preference {key} not persisted");
}
