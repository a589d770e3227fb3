//! Integration tests for users vertical slice


use tune_core::{CreateUser, EntityKind, TuneError};
use tune_storage::users;
use test_helpers::*;

fn new_user(username: &str, email: &str) -> CreateUser {
    CreateUser {
        username: Some(username.to_string()),
        email: Some(email.to_string()),
        password_hash: Some("$2b$04$hashhashhashhashhashhu".to_string()),
    }
}

#[tokio::test]
async fn test_create_user_and_list_without_password() {
    let store = TestStore::new().await;
    let coll = store.storage.users();

    let user = users::create(coll, new_user("alice", "alice@example.com"))
        .await
        .unwrap();
    assert_eq!(user.id, 1);

    let listed = users::get_all(coll).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].username, "alice");
    assert_eq!(listed[0].email, "alice@example.com");
    assert_eq!(listed[0].created_at, user.created_at);

    let json = serde_json::to_value(&listed).unwrap();
    assert!(json[0].get("passwordHash").is_none());
    assert!(json[0].get("password").is_none());
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let store = TestStore::new().await;
    let coll = store.storage.users();
    users::create(coll, new_user("alice", "alice@example.com"))
        .await
        .unwrap();

    let err = users::create(coll, new_user("alice2", "Alice@Example.com"))
        .await
        .unwrap_err();

    assert_eq!(err.domain(), Some(&TuneError::Duplicate(EntityKind::User)));
    assert_eq!(users::get_all(coll).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_fields_rejected() {
    let store = TestStore::new().await;
    let coll = store.storage.users();

    let mut incomplete = new_user("bob", "bob@example.com");
    incomplete.email = Some("  ".to_string());

    let err = users::create(coll, incomplete).await.unwrap_err();
    assert_eq!(
        err.domain(),
        Some(&TuneError::missing_field(EntityKind::User, "email"))
    );
}

#[tokio::test]
async fn test_find_by_email() {
    let store = TestStore::new().await;
    let coll = store.storage.users();
    users::create(coll, new_user("alice", "alice@example.com"))
        .await
        .unwrap();
    users::create(coll, new_user("bob", "bob@example.com"))
        .await
        .unwrap();

    let bob = users::find_by_email(coll, "BOB@example.com ").await.unwrap();
    assert_eq!(bob.map(|u| u.id), Some(2));
    assert!(users::find_by_email(coll, "carol@example.com")
        .await
        .unwrap()
        .is_none());

    assert_eq!(users::get_by_id(coll, 1).await.unwrap().unwrap().username, "alice");
}
