#![forbid(unsafe_code)]

pub mod blob;
pub mod kv;
pub mod repository;

pub use kv::{InMemoryStore, JsonFileStore, KeyValueStore};
pub use repository::{
    ProgressRepository, SessionStateRepository, Storage, StorageError, UserDirectoryRepository,
};
