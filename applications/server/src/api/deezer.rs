/// Deezer proxy API routes
///
/// Upstream bodies are relayed verbatim; failures carry a route-specific
/// message and the upstream status when there is one.
use crate::{
    api::parse_id,
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tune_core::types::required_text;
use tune_deezer::SearchKind;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// GET /api/deezer/tracks
pub async fn chart_tracks(State(app_state): State<AppState>) -> Result<Json<Value>> {
    app_state
        .deezer
        .chart_tracks()
        .await
        .map(Json)
        .map_err(|e| ServerError::upstream(e, "Erreur lors de la récupération des pistes"))
}

/// GET /api/deezer/playlists
pub async fn top_playlists(State(app_state): State<AppState>) -> Result<Json<Value>> {
    app_state
        .deezer
        .top_playlists()
        .await
        .map(Json)
        .map_err(|e| {
            ServerError::upstream(e, "Erreur lors de la récupération des playlists Deezer")
        })
}

/// GET /api/deezer/search?q=&type=
pub async fn search(
    State(app_state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>> {
    let query = required_text(params.q.as_deref())
        .ok_or_else(|| ServerError::BadRequest("Paramètre de recherche requis".to_string()))?;

    let kind = match required_text(params.kind.as_deref()) {
        Some(raw) => raw
            .parse::<SearchKind>()
            .map_err(|e| ServerError::upstream(e, "Erreur lors de la recherche"))?,
        None => SearchKind::default(),
    };

    app_state
        .deezer
        .search(&query, kind)
        .await
        .map(Json)
        .map_err(|e| ServerError::upstream(e, "Erreur lors de la recherche"))
}

/// GET /api/deezer/playlist/:id
pub async fn playlist(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let id = parse_id(&id)?;
    app_state
        .deezer
        .playlist(id)
        .await
        .map(Json)
        .map_err(|e| ServerError::upstream(e, "Playlist non trouvée"))
}

/// GET /api/deezer/playlist/:id/tracks
pub async fn playlist_tracks(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let id = parse_id(&id)?;
    app_state
        .deezer
        .playlist_tracks(id)
        .await
        .map(Json)
        .map_err(|e| ServerError::upstream(e, "Tracks non trouvés"))
}
