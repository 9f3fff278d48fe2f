use std::collections::HashMap;

use tutor_core::model::{ProgressRecord, UserId};

use super::mapping::ProgressRecordDto;
use super::{BlobRepository, KEY_PROGRESS};
use crate::repository::{ProgressRepository, StorageError};

type ProgressStoreDto = HashMap<String, ProgressRecordDto>;

impl ProgressRepository for BlobRepository {
    fn load(&self, user: &UserId) -> Result<Option<ProgressRecord>, StorageError> {
        let store: ProgressStoreDto = self.read_or_default(KEY_PROGRESS)?;
        let Some(dto) = store.get(user.as_str()) else {
            return Ok(None);
        };
        match dto.clone().into_record() {
            Ok(record) => Ok(Some(record)),
            Err(err) => {
                tracing::warn!(user = %user, %err, "discarding invalid progress record");
                Ok(None)
            }
        }
    }

    fn upsert(&self, user: &UserId, record: &ProgressRecord) -> Result<(), StorageError> {
        // Re-read before writing so only this user's entry is replaced.
        let mut store: ProgressStoreDto = self.read_or_default(KEY_PROGRESS)?;
        store.insert(
            user.as_str().to_string(),
            ProgressRecordDto::from_record(record),
        );
        self.write(KEY_PROGRESS, &store)
    }
}
