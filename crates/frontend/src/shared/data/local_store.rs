//! localStorage-backed persistence for the record collections.
//!
//! Each collection is stored as one whole, self-contained JSON array under a
//! fixed key. There are no partial writes: a mutation loads the collection,
//! changes it in memory, and explicitly saves the entire array back.

use contracts::shared::codec::{decode_collection, encode_collection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

pub const STORES_KEY: &str = "stores";
pub const SKUS_KEY: &str = "skus";

fn storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

/// An owned, in-memory copy of one persisted collection.
pub struct Collection<T> {
    key: &'static str,
    pub items: Vec<T>,
}

impl<T: Serialize + DeserializeOwned> Collection<T> {
    /// Load a collection. A missing key is an empty collection; a corrupt
    /// blob is logged and treated as empty.
    pub fn load(key: &'static str) -> Self {
        let items = match storage().and_then(|s| s.get_item(key).ok().flatten()) {
            Some(raw) => match decode_collection(&raw) {
                Ok(items) => items,
                Err(e) => {
                    log::error!("corrupt '{key}' collection, treating as empty: {e:#}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Self { key, items }
    }

    /// Serialize the entire collection back to storage.
    pub fn save(&self) -> Result<(), String> {
        let raw = encode_collection(&self.items).map_err(|e| e.to_string())?;
        storage()
            .ok_or_else(|| "localStorage is not available".to_string())?
            .set_item(self.key, &raw)
            .map_err(|e| format!("failed to write '{}': {e:?}", self.key))
    }
}
