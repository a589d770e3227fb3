//! Storage context initialization and file handling


use tune_storage::{playlists, StorageContext, StorageError, StoragePaths};
use test_helpers::*;

#[tokio::test]
async fn test_initialize_creates_default_documents() {
    let temp_dir = tempfile::tempdir().unwrap();
    let paths = StoragePaths::in_dir(temp_dir.path().join("data"));
    let storage = StorageContext::new(paths.clone());

    let status = storage.file_status().await;
    assert!(!status.db && !status.users && !status.favorites && !status.albums);

    storage.initialize().await.unwrap();

    let status = storage.file_status().await;
    assert!(status.db && status.users && status.favorites && status.albums);

    let db: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&paths.playlists).unwrap()).unwrap();
    assert_eq!(db, serde_json::json!({ "playlists": [] }));

    let users: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&paths.users).unwrap()).unwrap();
    assert_eq!(users, serde_json::json!([]));
}

#[tokio::test]
async fn test_initialize_keeps_existing_data() {
    let store = TestStore::new().await;
    create_test_playlist(&store.storage, "Road Trip").await;

    let reopened = StorageContext::new(store.paths.clone());
    reopened.initialize().await.unwrap();

    let all = playlists::get_all(reopened.playlists()).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_corrupt_file_fails_loudly() {
    let store = TestStore::new().await;
    std::fs::write(&store.paths.playlists, "{ not json").unwrap();

    let err = playlists::get_all(store.storage.playlists())
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Corrupt { .. }));

    let err = playlists::create(store.storage.playlists(), playlist_named("Road Trip"))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Corrupt { .. }));

    // The corrupt document was not overwritten
    assert_eq!(
        std::fs::read_to_string(&store.paths.playlists).unwrap(),
        "{ not json"
    );
}

#[tokio::test]
async fn test_deleted_file_reads_empty_until_next_write() {
    let store = TestStore::new().await;
    std::fs::remove_file(&store.paths.albums).unwrap();

    let albums = tune_storage::albums::get_all(store.storage.albums())
        .await
        .unwrap();
    assert!(albums.is_empty());
    assert!(!store.paths.albums.exists());

    store.storage.initialize().await.unwrap();
    assert!(store.dir().join("albums.json").exists());
}
