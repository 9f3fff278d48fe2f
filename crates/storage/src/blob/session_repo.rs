use tutor_core::model::User;

use super::{BlobRepository, KEY_CURRENT_USER};
use crate::repository::{SessionStateRepository, StorageError};

impl SessionStateRepository for BlobRepository {
    fn load_user(&self) -> Result<Option<User>, StorageError> {
        self.read_or_default(KEY_CURRENT_USER)
    }

    fn save_user(&self, user: &User) -> Result<(), StorageError> {
        self.write(KEY_CURRENT_USER, user)
    }
}
