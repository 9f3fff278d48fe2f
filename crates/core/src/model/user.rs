use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::UserId;

/// Kind of a logged-in identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserKind {
    Student,
    Guest,
}

impl UserKind {
    /// Returns the lowercase wire name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Guest => "guest",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserError {
    #[error("name must not be empty")]
    EmptyName,
}

/// A logged-in identity.
///
/// Held in memory for the session and mirrored into storage for
/// restore-on-relaunch; replaced only by a new login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    display_name: String,
    kind: UserKind,
}

impl User {
    /// Creates a student from a typed name.
    ///
    /// # Errors
    ///
    /// Returns `UserError::EmptyName` if the trimmed name is empty.
    pub fn student(name: &str, at: DateTime<Utc>) -> Result<Self, UserError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(UserError::EmptyName);
        }
        Ok(Self {
            id: UserId::generate(UserKind::Student, at),
            display_name: name.to_string(),
            kind: UserKind::Student,
        })
    }

    /// Creates a guest identity. Guests are always displayed as "Guest".
    #[must_use]
    pub fn guest(at: DateTime<Utc>) -> Self {
        Self {
            id: UserId::generate(UserKind::Guest, at),
            display_name: "Guest".to_string(),
            kind: UserKind::Guest,
        }
    }

    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn kind(&self) -> UserKind {
        self.kind
    }

    /// Key under which a returning student is resolved in the user
    /// directory. Guests are never registered there.
    #[must_use]
    pub fn directory_key(&self) -> String {
        Self::directory_key_for(&self.display_name)
    }

    /// Normalizes a typed name into a directory key.
    #[must_use]
    pub fn directory_key_for(name: &str) -> String {
        name.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn test_student_trims_name() {
        let user = User::student("  Ana  ", fixed_now()).unwrap();
        assert_eq!(user.display_name(), "Ana");
        assert_eq!(user.kind(), UserKind::Student);
    }

    #[test]
    fn test_student_rejects_blank_name() {
        let err = User::student("   ", fixed_now()).unwrap_err();
        assert_eq!(err, UserError::EmptyName);
    }

    #[test]
    fn test_guest_is_always_named_guest() {
        let user = User::guest(fixed_now());
        assert_eq!(user.display_name(), "Guest");
        assert_eq!(user.kind(), UserKind::Guest);
    }

    #[test]
    fn test_directory_key_normalizes_case_and_whitespace() {
        assert_eq!(User::directory_key_for(" Ana Lopez "), "ana lopez");
        let user = User::student("Ana Lopez", fixed_now()).unwrap();
        assert_eq!(user.directory_key(), "ana lopez");
    }
}
