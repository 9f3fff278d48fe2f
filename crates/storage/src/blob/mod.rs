//! Blob-backed repositories over a key-value store.
//!
//! Each concern lives under its own fixed key; values are JSON blobs. A
//! blob that fails to parse is treated as absent, discarding the corrupted
//! data instead of surfacing an error to the user.

mod directory_repo;
mod mapping;
mod progress_repo;
mod session_repo;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::kv::KeyValueStore;
use crate::repository::StorageError;

/// Key holding the serialized current user.
pub const KEY_CURRENT_USER: &str = "tutor.user";
/// Key holding the user directory (normalized name to user).
pub const KEY_USER_DIRECTORY: &str = "tutor.users";
/// Key holding the progress store (user id to progress record).
pub const KEY_PROGRESS: &str = "tutor.progress";

/// Implements every repository trait over one `KeyValueStore`.
#[derive(Clone)]
pub struct BlobRepository {
    store: Arc<dyn KeyValueStore>,
}

impl BlobRepository {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Decode the JSON blob under `key`; a missing or unparseable blob
    /// decodes to `T::default()`.
    fn read_or_default<T>(&self, key: &str) -> Result<T, StorageError>
    where
        T: DeserializeOwned + Default,
    {
        let Some(raw) = self.store.get(key)? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::warn!(key, %err, "discarding unparseable blob");
                Ok(T::default())
            }
        }
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.store.set(key, &raw)
    }
}
