/// Playlists API routes
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
use tune_core::{AddTrack, CreatePlaylist, Playlist, PlaylistId, Track, TrackId, UpdatePlaylist};
use tune_storage::playlists;

#[derive(Debug, Serialize)]
pub struct PlaylistDeleted {
    pub success: bool,
    pub message: String,
    pub id: PlaylistId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRemoved {
    pub success: bool,
    pub message: String,
    pub playlist_id: PlaylistId,
    pub music_id: TrackId,
}

/// GET /api/playlists
/// Get all playlists with their tracks
pub async fn list_playlists(State(app_state): State<AppState>) -> Result<Json<Vec<Playlist>>> {
    let playlists = playlists::get_all(app_state.storage.playlists()).await?;
    Ok(Json(playlists))
}

/// POST /api/playlists
/// Create a new, empty playlist
pub async fn create_playlist(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<CreatePlaylist>, JsonRejection>,
) -> Result<(StatusCode, Json<Playlist>)> {
    let Json(req) = payload?;
    let playlist = playlists::create(app_state.storage.playlists(), req).await?;
    Ok((StatusCode::CREATED, Json(playlist)))
}

/// GET /api/playlists/:id
pub async fn get_playlist(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Playlist>> {
    let id = parse_id(&id)?;
    let playlist = playlists::get_by_id(app_state.storage.playlists(), id).await?;
    Ok(Json(playlist))
}

/// PATCH /api/playlists/:id
/// Rename a playlist and/or change its description
pub async fn update_playlist(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdatePlaylist>, JsonRejection>,
) -> Result<Json<Playlist>> {
    let id = parse_id(&id)?;
    let Json(patch) = payload?;
    let playlist = playlists::update(app_state.storage.playlists(), id, patch).await?;
    Ok(Json(playlist))
}

/// DELETE /api/playlists/:id
pub async fn delete_playlist(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlaylistDeleted>> {
    let id = parse_id(&id)?;
    playlists::delete(app_state.storage.playlists(), id).await?;

    Ok(Json(PlaylistDeleted {
        success: true,
        message: "Playlist supprimée avec succès".to_string(),
        id,
    }))
}

/// POST /api/playlists/:id/musics (also mounted at /add-music)
/// Append a track to a playlist
pub async fn add_track(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<AddTrack>, JsonRejection>,
) -> Result<(StatusCode, Json<Track>)> {
    let id = parse_id(&id)?;
    let Json(req) = payload?;

    let track = playlists::add_track(app_state.storage.playlists(), id, req).await?;
    Ok((StatusCode::CREATED, Json(track)))
}

/// DELETE /api/playlists/:id/musics/:music_id
pub async fn remove_track(
    State(app_state): State<AppState>,
    Path((id, music_id)): Path<(String, String)>,
) -> Result<Json<TrackRemoved>> {
    let playlist_id = parse_id(&id)?;
    let music_id = parse_id(&music_id)?;

    playlists::remove_track(app_state.storage.playlists(), playlist_id, music_id).await?;

    Ok(Json(TrackRemoved {
        success: true,
        message: "Musique supprimée de la playlist".to_string(),
        playlist_id,
        music_id,
    }))
}
