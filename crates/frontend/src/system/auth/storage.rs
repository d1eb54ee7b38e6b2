//! Session flag persistence.
//!
//! Identity is fully delegated to the external provider; the client only
//! keeps the boolean gate and the display account between page loads.

use web_sys::window;

const SESSION_KEY: &str = "session";

fn storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn save_session(account: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(SESSION_KEY, account);
    }
}

pub fn get_session() -> Option<String> {
    storage().and_then(|s| s.get_item(SESSION_KEY).ok().flatten())
}

pub fn clear_session() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
