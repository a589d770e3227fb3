/// Albums API routes
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
use tune_core::{Album, AlbumId, CreateAlbum};
use tune_storage::albums;

#[derive(Debug, Serialize)]
pub struct AlbumDeleted {
    pub success: bool,
    pub message: String,
    pub id: AlbumId,
}

/// GET /api/albums
pub async fn list_albums(State(app_state): State<AppState>) -> Result<Json<Vec<Album>>> {
    let albums = albums::get_all(app_state.storage.albums()).await?;
    Ok(Json(albums))
}

/// POST /api/albums
pub async fn create_album(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<CreateAlbum>, JsonRejection>,
) -> Result<(StatusCode, Json<Album>)> {
    let Json(req) = payload?;
    let album = albums::create(app_state.storage.albums(), req).await?;
    Ok((StatusCode::CREATED, Json(album)))
}

/// GET /api/albums/:id
pub async fn get_album(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Album>> {
    let id = parse_id(&id)?;
    let album = albums::get_by_id(app_state.storage.albums(), id).await?;
    Ok(Json(album))
}

/// DELETE /api/albums/:id
pub async fn delete_album(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AlbumDeleted>> {
    let id = parse_id(&id)?;
    albums::delete(app_state.storage.albums(), id).await?;

    Ok(Json(AlbumDeleted {
        success: true,
        message: "Album supprimé avec succès".to_string(),
        id,
    }))
}
