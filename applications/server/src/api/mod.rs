/// API route modules
pub mod accounts;
pub mod albums;
pub mod deezer;
pub mod favorites;
pub mod health;
pub mod playlists;
pub mod users;

use crate::{
    error::{ServerError, INTERNAL_ERROR_MESSAGE},
    state::AppState,
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Parse a numeric id path segment
pub(crate) fn parse_id(raw: &str) -> crate::error::Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| ServerError::BadRequest("Identifiant invalide".to_string()))
}

/// Build the application router
pub fn create_router(app_state: AppState) -> Router {
    let account_routes = Router::new()
        .route("/signup", post(accounts::signup))
        .route("/signin", post(accounts::signin))
        .route("/forgot-password", post(accounts::forgot_password));

    let api_routes = Router::new()
        .route("/health", get(health::health))
        // Users
        .route("/users", get(users::list_users))
        // Deezer proxy
        .route("/deezer/tracks", get(deezer::chart_tracks))
        .route("/deezer/playlists", get(deezer::top_playlists))
        .route("/deezer/search", get(deezer::search))
        .route("/deezer/playlist/:id", get(deezer::playlist))
        .route("/deezer/playlist/:id/tracks", get(deezer::playlist_tracks))
        // Favorites
        .route(
            "/favorites",
            get(favorites::list_favorites).post(favorites::add_favorite),
        )
        .route("/favorites/:id", delete(favorites::remove_favorite))
        // Playlists
        .route(
            "/playlists",
            get(playlists::list_playlists).post(playlists::create_playlist),
        )
        .route(
            "/playlists/:id",
            get(playlists::get_playlist)
                .patch(playlists::update_playlist)
                .delete(playlists::delete_playlist),
        )
        .route("/playlists/:id/musics", post(playlists::add_track))
        .route("/playlists/:id/add-music", post(playlists::add_track))
        .route(
            "/playlists/:id/musics/:music_id",
            delete(playlists::remove_track),
        )
        // Albums
        .route(
            "/albums",
            get(albums::list_albums).post(albums::create_album),
        )
        .route(
            "/albums/:id",
            get(albums::get_album).delete(albums::delete_album),
        );

    Router::new()
        .merge(account_routes)
        .nest("/api", api_routes)
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn route_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route non trouvée" })),
    )
        .into_response()
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": INTERNAL_ERROR_MESSAGE })),
    )
        .into_response()
}
