//! User accounts

use crate::{next_id, Collection, Result};
use chrono::Utc;
use tune_core::types::required_text;
use tune_core::{CreateUser, EntityKind, TuneError, User, UserId, UserSummary};

type Users = Collection<Vec<User>>;

/// Get all users without their credentials
pub async fn get_all(users: &Users) -> Result<Vec<UserSummary>> {
    let all = users.load().await?;
    Ok(all.iter().map(User::summary).collect())
}

/// Get a user by id
pub async fn get_by_id(users: &Users, id: UserId) -> Result<Option<User>> {
    let all = users.load().await?;
    Ok(all.into_iter().find(|u| u.id == id))
}

/// Find a user by email (case-insensitive)
pub async fn find_by_email(users: &Users, email: &str) -> Result<Option<User>> {
    let all = users.load().await?;
    Ok(all.into_iter().find(|u| u.has_email(email)))
}

/// Create a user
///
/// All fields are required. The email must not be used by another account.
pub async fn create(users: &Users, new_user: CreateUser) -> Result<User> {
    let (Some(username), Some(email), Some(password_hash)) = (
        required_text(new_user.username.as_deref()),
        required_text(new_user.email.as_deref()),
        required_text(new_user.password_hash.as_deref()),
    ) else {
        let field = missing_field(&new_user);
        return Err(TuneError::missing_field(EntityKind::User, field).into());
    };

    let user = users
        .update(|all| {
            if all.iter().any(|u| u.has_email(&email)) {
                return Err(TuneError::Duplicate(EntityKind::User));
            }

            let user = User {
                id: next_id(all.iter()),
                username,
                email,
                password_hash,
                created_at: Utc::now(),
            };
            all.push(user.clone());
            Ok(user)
        })
        .await?;

    tracing::info!("Registered user {} ({})", user.id, user.email);
    Ok(user)
}

fn missing_field(new_user: &CreateUser) -> &'static str {
    if required_text(new_user.username.as_deref()).is_none() {
        "username"
    } else if required_text(new_user.email.as_deref()).is_none() {
        "email"
    } else {
        "password"
    }
}
