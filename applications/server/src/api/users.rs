/// Users API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use tune_core::UserSummary;
use tune_storage::users;

/// GET /api/users
/// List accounts without their password hashes
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<UserSummary>>> {
    let users = users::get_all(app_state.storage.users()).await?;
    Ok(Json(users))
}
