/// Account API routes: sign-up, sign-in and password reset requests
use crate::{
    error::{AccountError, ServerError},
    services::accounts::{self, Registration},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tune_core::{types::required_text, EntityKind, TuneError, UserId};
use tune_storage::users;

type AccountResult<T> = std::result::Result<Json<T>, AccountError>;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub message: String,
    pub user: RegisteredUser,
}

#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct SigninResponse {
    pub success: bool,
    pub message: String,
    pub user: SignedInUser,
}

#[derive(Debug, Serialize)]
pub struct SignedInUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// POST /signup
pub async fn signup(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<SignupRequest>, JsonRejection>,
) -> AccountResult<SignupResponse> {
    let Json(req) = payload?;

    let user = accounts::register(
        &app_state.storage,
        &app_state.auth_service,
        Registration {
            username: req.username,
            email: req.email,
            password: req.password,
        },
    )
    .await?;

    Ok(Json(SignupResponse {
        success: true,
        message: "Inscription réussie !".to_string(),
        user: RegisteredUser {
            username: user.username,
            email: user.email,
        },
    }))
}

/// POST /signin
pub async fn signin(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<SigninRequest>, JsonRejection>,
) -> AccountResult<SigninResponse> {
    let Json(req) = payload?;

    let (Some(email), Some(password)) = (
        required_text(req.email.as_deref()),
        req.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(ServerError::BadRequest("Email et mot de passe requis !".to_string()).into());
    };

    let user =
        accounts::authenticate(&app_state.storage, &app_state.auth_service, &email, &password)
            .await?;

    Ok(Json(SigninResponse {
        success: true,
        message: format!("Bienvenue {} !", user.username),
        user: SignedInUser {
            id: user.id,
            username: user.username,
            email: user.email,
        },
    }))
}

/// POST /forgot-password
///
/// Only checks that the email belongs to an account; no mail is sent.
pub async fn forgot_password(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<ForgotPasswordRequest>, JsonRejection>,
) -> AccountResult<MessageResponse> {
    let Json(req) = payload?;

    let Some(email) = required_text(req.email.as_deref()) else {
        return Err(ServerError::BadRequest("Email requis !".to_string()).into());
    };

    if users::find_by_email(app_state.storage.users(), &email)
        .await?
        .is_none()
    {
        return Err(TuneError::not_found(EntityKind::User, email).into());
    }

    tracing::info!("Password reset requested for {}", email);
    Ok(Json(MessageResponse {
        success: true,
        message: "Un lien de réinitialisation a été envoyé à votre email".to_string(),
    }))
}
