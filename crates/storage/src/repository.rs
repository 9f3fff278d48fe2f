use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use tutor_core::model::{ProgressRecord, User, UserId};

use crate::blob::BlobRepository;
use crate::kv::{InMemoryStore, JsonFileStore, KeyValueStore};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(String),

    #[error("lock poisoned: {0}")]
    Lock(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persists the current user for restore-on-relaunch.
pub trait SessionStateRepository: Send + Sync {
    /// Returns the last persisted user, if any. Absence is a normal,
    /// representable state, not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    fn load_user(&self) -> Result<Option<User>, StorageError>;

    /// Persist `user` as the current user, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    fn save_user(&self, user: &User) -> Result<(), StorageError>;
}

/// Resolves returning students to their stable identity.
pub trait UserDirectoryRepository: Send + Sync {
    /// Look up a registered user by directory key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    fn find(&self, key: &str) -> Result<Option<User>, StorageError>;

    /// Register a user under its directory key, replacing any previous
    /// entry for that key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    fn register(&self, user: &User) -> Result<(), StorageError>;
}

/// Per-user progress persistence.
pub trait ProgressRepository: Send + Sync {
    /// Fetch the progress record for `user`, if one is stored and valid.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    fn load(&self, user: &UserId) -> Result<Option<ProgressRecord>, StorageError>;

    /// Overwrite the single entry for `user`, leaving other entries alone.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    fn upsert(&self, user: &UserId, record: &ProgressRecord) -> Result<(), StorageError>;
}

/// Aggregates the repositories behind trait objects for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub session: Arc<dyn SessionStateRepository>,
    pub directory: Arc<dyn UserDirectoryRepository>,
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    /// Build a `Storage` backed by an in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_kv(Arc::new(InMemoryStore::new()))
    }

    /// Build a `Storage` backed by a JSON file at `path`.
    #[must_use]
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        Self::from_kv(Arc::new(JsonFileStore::new(path)))
    }

    /// Build a `Storage` over any key-value store.
    #[must_use]
    pub fn from_kv(store: Arc<dyn KeyValueStore>) -> Self {
        let repo = BlobRepository::new(store);
        let session: Arc<dyn SessionStateRepository> = Arc::new(repo.clone());
        let directory: Arc<dyn UserDirectoryRepository> = Arc::new(repo.clone());
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo);
        Self {
            session,
            directory,
            progress,
        }
    }
}
