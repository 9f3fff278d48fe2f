use std::sync::Arc;

use storage::{
    ProgressRepository, SessionStateRepository, Storage, StorageError, UserDirectoryRepository,
};
use tutor_core::Clock;
use tutor_core::content;
use tutor_core::model::{ProgressRecord, User};

use crate::error::LoginError;

/// The active user together with their loaded progress record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudySession {
    user: User,
    progress: ProgressRecord,
}

impl StudySession {
    #[must_use]
    pub fn new(user: User, progress: ProgressRecord) -> Self {
        Self { user, progress }
    }

    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressRecord {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut ProgressRecord {
        &mut self.progress
    }
}

/// Resolves the active user and owns loading their progress record.
#[derive(Clone)]
pub struct SessionManager {
    clock: Clock,
    session: Arc<dyn SessionStateRepository>,
    directory: Arc<dyn UserDirectoryRepository>,
    progress: Arc<dyn ProgressRepository>,
}

impl SessionManager {
    #[must_use]
    pub fn new(clock: Clock, storage: &Storage) -> Self {
        Self {
            clock,
            session: Arc::clone(&storage.session),
            directory: Arc::clone(&storage.directory),
            progress: Arc::clone(&storage.progress),
        }
    }

    /// Log in as a student with the typed name, or as a guest.
    ///
    /// A returning student resolves to the stable identity registered
    /// under their normalized name; guests get a fresh identity every
    /// time. The resolved user is persisted as the current user and their
    /// progress record is loaded, with a fresh default persisted on first
    /// login.
    ///
    /// # Errors
    ///
    /// Returns `LoginError::User` for an empty student name and
    /// `LoginError::Storage` if persistence fails. Nothing is mutated on
    /// a rejected name.
    pub fn login(&self, name: &str, guest: bool) -> Result<StudySession, LoginError> {
        let now = self.clock.now();
        let user = if guest {
            User::guest(now)
        } else {
            let candidate = User::student(name, now)?;
            match self.directory.find(&candidate.directory_key())? {
                Some(known) => known,
                None => {
                    self.directory.register(&candidate)?;
                    candidate
                }
            }
        };

        self.session.save_user(&user)?;
        let progress = self.load_or_init(&user)?;
        tracing::info!(user = %user.id(), name = user.display_name(), "logged in");
        Ok(StudySession::new(user, progress))
    }

    /// Restore the last session at startup, if one was persisted.
    ///
    /// Absence of a stored session is a normal state, not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read or the fresh
    /// default record cannot be written.
    pub fn restore(&self) -> Result<Option<StudySession>, StorageError> {
        let Some(user) = self.session.load_user()? else {
            tracing::debug!("no persisted session to restore");
            return Ok(None);
        };
        let progress = self.load_or_init(&user)?;
        tracing::info!(user = %user.id(), "restored session");
        Ok(Some(StudySession::new(user, progress)))
    }

    fn load_or_init(&self, user: &User) -> Result<ProgressRecord, StorageError> {
        if let Some(record) = self.progress.load(user.id())? {
            return Ok(record);
        }
        let starter = content::starter_progress();
        self.progress.upsert(user.id(), &starter)?;
        Ok(starter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_core::model::UserKind;
    use tutor_core::time::fixed_now;

    fn manager() -> (SessionManager, Storage) {
        let storage = Storage::in_memory();
        let manager = SessionManager::new(Clock::fixed(fixed_now()), &storage);
        (manager, storage)
    }

    #[test]
    fn login_initializes_and_persists_starter_progress() {
        let (manager, storage) = manager();
        let session = manager.login("Ana", false).unwrap();

        assert_eq!(session.user().display_name(), "Ana");
        assert_eq!(session.progress(), &content::starter_progress());
        assert_eq!(
            storage.progress.load(session.user().id()).unwrap(),
            Some(content::starter_progress())
        );
    }

    #[test]
    fn login_rejects_empty_name_without_mutating() {
        let (manager, storage) = manager();
        assert!(manager.login("   ", false).is_err());
        assert!(storage.session.load_user().unwrap().is_none());
    }

    #[test]
    fn returning_student_resolves_to_the_same_identity() {
        let (manager, _storage) = manager();
        let first = manager.login("Ana", false).unwrap();
        let second = manager.login("  ANA ", false).unwrap();
        assert_eq!(first.user().id(), second.user().id());
    }

    #[test]
    fn guests_are_not_registered() {
        let (manager, storage) = manager();
        let session = manager.login("ignored", true).unwrap();
        assert_eq!(session.user().display_name(), "Guest");
        assert_eq!(session.user().kind(), UserKind::Guest);
        assert!(storage.directory.find("guest").unwrap().is_none());
        assert!(storage.directory.find("ignored").unwrap().is_none());
    }

    #[test]
    fn restore_returns_none_without_a_stored_session() {
        let (manager, _storage) = manager();
        assert!(manager.restore().unwrap().is_none());
    }

    #[test]
    fn restore_rehydrates_the_logged_in_user() {
        let (manager, _storage) = manager();
        let session = manager.login("Ana", false).unwrap();

        let restored = manager.restore().unwrap().expect("session persisted");
        assert_eq!(restored.user(), session.user());
        assert_eq!(restored.progress(), session.progress());
    }
}
