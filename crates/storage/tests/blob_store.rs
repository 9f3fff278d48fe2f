use std::sync::Arc;

use storage::blob::{KEY_PROGRESS, KEY_USER_DIRECTORY};
use storage::{InMemoryStore, JsonFileStore, KeyValueStore, Storage};
use tutor_core::model::{ProgressRecord, User, UserId, UserKind};
use tutor_core::time::fixed_now;

fn sample_record() -> ProgressRecord {
    let mut record = ProgressRecord::starter(3, 5);
    record.record_practice_check(2, true, fixed_now()).unwrap();
    record.record_quiz_result(2, 3, fixed_now());
    record
}

#[test]
fn progress_round_trips_per_user() {
    let storage = Storage::in_memory();
    let id = UserId::generate(UserKind::Student, fixed_now());

    assert!(storage.progress.load(&id).unwrap().is_none());

    let record = sample_record();
    storage.progress.upsert(&id, &record).unwrap();
    assert_eq!(storage.progress.load(&id).unwrap(), Some(record));
}

#[test]
fn upsert_leaves_other_entries_alone() {
    let storage = Storage::in_memory();
    let ana: UserId = "student_1".parse().unwrap();
    let ben: UserId = "student_2".parse().unwrap();

    let ana_record = sample_record();
    storage.progress.upsert(&ana, &ana_record).unwrap();
    storage
        .progress
        .upsert(&ben, &ProgressRecord::starter(3, 5))
        .unwrap();

    assert_eq!(storage.progress.load(&ana).unwrap(), Some(ana_record));
    assert_eq!(
        storage.progress.load(&ben).unwrap(),
        Some(ProgressRecord::starter(3, 5))
    );
}

#[test]
fn corrupted_progress_blob_reads_as_empty() {
    let store = Arc::new(InMemoryStore::new());
    store.set(KEY_PROGRESS, "{not json").unwrap();

    let storage = Storage::from_kv(store.clone());
    let id: UserId = "student_1".parse().unwrap();
    assert!(storage.progress.load(&id).unwrap().is_none());

    // A write after recovery starts from an empty store and succeeds.
    storage.progress.upsert(&id, &sample_record()).unwrap();
    assert_eq!(storage.progress.load(&id).unwrap(), Some(sample_record()));
}

#[test]
fn invalid_stored_record_is_discarded() {
    let store = Arc::new(InMemoryStore::new());
    // Parses fine but violates score <= total.
    store
        .set(
            KEY_PROGRESS,
            r#"{"student_1":{"quiz":{"score":9,"total":3,"completed":true},"practice":{"completed":[],"correct":0,"total":5},"last_activity":null}}"#,
        )
        .unwrap();

    let storage = Storage::from_kv(store);
    let id: UserId = "student_1".parse().unwrap();
    assert!(storage.progress.load(&id).unwrap().is_none());
}

#[test]
fn current_user_round_trips() {
    let storage = Storage::in_memory();
    assert!(storage.session.load_user().unwrap().is_none());

    let user = User::student("Ana", fixed_now()).unwrap();
    storage.session.save_user(&user).unwrap();
    assert_eq!(storage.session.load_user().unwrap(), Some(user.clone()));

    // A new login replaces the stored user outright.
    let guest = User::guest(fixed_now());
    storage.session.save_user(&guest).unwrap();
    assert_eq!(storage.session.load_user().unwrap(), Some(guest));
}

#[test]
fn directory_resolves_registered_users_by_key() {
    let storage = Storage::in_memory();
    let user = User::student("Ana Lopez", fixed_now()).unwrap();

    assert!(storage.directory.find("ana lopez").unwrap().is_none());
    storage.directory.register(&user).unwrap();
    assert_eq!(storage.directory.find("ana lopez").unwrap(), Some(user));
}

#[test]
fn corrupted_directory_blob_reads_as_empty() {
    let store = Arc::new(InMemoryStore::new());
    store.set(KEY_USER_DIRECTORY, "[]").unwrap();

    let storage = Storage::from_kv(store);
    assert!(storage.directory.find("ana").unwrap().is_none());
}

#[test]
fn json_file_store_survives_reopen() {
    let path = std::env::temp_dir().join(format!(
        "tutor-blob-store-{}-{}.json",
        std::process::id(),
        fixed_now().timestamp()
    ));
    let _ = std::fs::remove_file(&path);

    let id: UserId = "student_1".parse().unwrap();
    let record = sample_record();
    {
        let storage = Storage::json_file(&path);
        storage.progress.upsert(&id, &record).unwrap();
    }

    // A fresh store over the same file sees the persisted entry.
    let reopened = Storage::json_file(&path);
    assert_eq!(reopened.progress.load(&id).unwrap(), Some(record));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn json_file_store_treats_corrupt_file_as_empty() {
    let path = std::env::temp_dir().join(format!(
        "tutor-blob-corrupt-{}-{}.json",
        std::process::id(),
        fixed_now().timestamp()
    ));
    std::fs::write(&path, "garbage").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(store.get(KEY_PROGRESS).unwrap().is_none());

    let _ = std::fs::remove_file(&path);
}
