/// Favorites API routes
use crate::{
    api::parse_id,
    error::Result,
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tune_core::{CreateFavorite, Favorite, FavoriteId};
use tune_storage::favorites;

#[derive(Debug, Serialize)]
pub struct FavoriteAdded {
    pub message: String,
    pub favorite: Favorite,
    pub favorites: Vec<Favorite>,
}

#[derive(Debug, Serialize)]
pub struct FavoriteRemoved {
    pub message: String,
    pub id: FavoriteId,
    pub favorites: Vec<Favorite>,
}

/// GET /api/favorites
pub async fn list_favorites(State(app_state): State<AppState>) -> Result<Json<Vec<Favorite>>> {
    let favorites = favorites::get_all(app_state.storage.favorites()).await?;
    Ok(Json(favorites))
}

/// POST /api/favorites
pub async fn add_favorite(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<CreateFavorite>, JsonRejection>,
) -> Result<(StatusCode, Json<FavoriteAdded>)> {
    let Json(req) = payload?;

    let (favorite, favorites) = favorites::create(app_state.storage.favorites(), req).await?;

    Ok((
        StatusCode::CREATED,
        Json(FavoriteAdded {
            message: "Ajouté aux favoris".to_string(),
            favorite,
            favorites,
        }),
    ))
}

/// DELETE /api/favorites/:id
pub async fn remove_favorite(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FavoriteRemoved>> {
    let id = parse_id(&id)?;
    let favorites = favorites::delete(app_state.storage.favorites(), id).await?;

    Ok(Json(FavoriteRemoved {
        message: "Supprimé des favoris".to_string(),
        id,
        favorites,
    }))
}
