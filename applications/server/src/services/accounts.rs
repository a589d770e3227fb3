/// Account registration and sign-in, shared by the HTTP routes and the CLI
use crate::{
    error::{Result, ServerError},
    services::AuthService,
};
use tune_core::{types::required_text, validation, CreateUser, EntityKind, TuneError, User};
use tune_storage::{users, StorageContext};

/// Message for unknown emails and wrong passwords alike
pub const BAD_CREDENTIALS: &str = "Email ou mot de passe incorrect !";

/// Registration request as submitted by the client
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Register a new account
///
/// Checks that every field is present, then the email shape and password
/// strength, then hashes the password and stores the user. A duplicate
/// email is detected by the users collection itself.
pub async fn register(
    storage: &StorageContext,
    auth_service: &AuthService,
    registration: Registration,
) -> Result<User> {
    let (Some(username), Some(email), Some(password)) = (
        required_text(registration.username.as_deref()),
        required_text(registration.email.as_deref()),
        // Passwords are taken verbatim
        registration.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(TuneError::missing_field(EntityKind::User, "all").into());
    };

    validation::validate_credentials(&email, &password)?;

    let password_hash = auth_service.hash_password_async(password).await?;
    let user = users::create(
        storage.users(),
        CreateUser {
            username: Some(username),
            email: Some(email),
            password_hash: Some(password_hash),
        },
    )
    .await?;

    Ok(user)
}

/// Check an email/password pair, returning the matching user
pub async fn authenticate(
    storage: &StorageContext,
    auth_service: &AuthService,
    email: &str,
    password: &str,
) -> Result<User> {
    let Some(user) = users::find_by_email(storage.users(), email).await? else {
        tracing::warn!("Sign-in failed for unknown email {}", email);
        return Err(ServerError::Auth(BAD_CREDENTIALS.to_string()));
    };

    let verified = auth_service
        .verify_password_async(password.to_string(), user.password_hash.clone())
        .await?;
    if !verified {
        tracing::warn!("Sign-in failed for {}: wrong password", email);
        return Err(ServerError::Auth(BAD_CREDENTIALS.to_string()));
    }

    tracing::info!("Sign-in succeeded for {}", email);
    Ok(user)
}
