use std::collections::HashMap;

use tutor_core::model::User;

use super::{BlobRepository, KEY_USER_DIRECTORY};
use crate::repository::{StorageError, UserDirectoryRepository};

type DirectoryDto = HashMap<String, User>;

impl UserDirectoryRepository for BlobRepository {
    fn find(&self, key: &str) -> Result<Option<User>, StorageError> {
        let directory: DirectoryDto = self.read_or_default(KEY_USER_DIRECTORY)?;
        Ok(directory.get(key).cloned())
    }

    fn register(&self, user: &User) -> Result<(), StorageError> {
        let mut directory: DirectoryDto = self.read_or_default(KEY_USER_DIRECTORY)?;
        directory.insert(user.directory_key(), user.clone());
        self.write(KEY_USER_DIRECTORY, &directory)
    }
}
