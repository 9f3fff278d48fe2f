//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;
use tutor_core::model::{ProgressError, UserError};

/// Errors emitted by `SessionManager::login`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoginError {
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while writing a progress record back to storage.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressSyncError {
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `PracticeService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PracticeError {
    #[error("answer is not a number")]
    NotANumber,
    #[error("no exercise with index {0}")]
    UnknownExercise(u32),
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by the remote API stub.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("remote API is unavailable")]
    Unavailable,
}
