/// Server error types
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tune_core::{EntityKind, TuneError};
use tune_deezer::DeezerError;
use tune_storage::StorageError;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Message returned for every failure whose details stay in the logs
pub const INTERNAL_ERROR_MESSAGE: &str = "Erreur interne du serveur";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Upstream error ({status}): {message}")]
    Upstream { status: StatusCode, message: String },

    #[error("Storage error: {0}")]
    Storage(StorageError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ServerError {
    /// Map an upstream failure, keeping the upstream status when it is an
    /// error status and falling back to 500 otherwise
    pub fn upstream(err: DeezerError, message: impl Into<String>) -> Self {
        let message = message.into();
        if let DeezerError::InvalidSearchType(kind) = &err {
            return ServerError::BadRequest(format!("Type de recherche invalide : {}", kind));
        }

        tracing::error!("Deezer request failed: {}", err);
        let status = err
            .upstream_status()
            .and_then(|s| StatusCode::from_u16(s).ok())
            .filter(|s| s.is_client_error() || s.is_server_error())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        ServerError::Upstream { status, message }
    }

    /// Status code and client-facing message
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ServerError::Auth(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ServerError::BadRequest(msg) | ServerError::Conflict(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            ServerError::Upstream { status, message } => (*status, message.clone()),
            ServerError::Storage(e) => {
                tracing::error!("Storage error: {}", e);
                internal()
            }
            ServerError::Config(msg) => {
                tracing::error!("Config error: {}", msg);
                internal()
            }
            ServerError::Bcrypt(e) => {
                tracing::error!("Bcrypt error: {:?}", e);
                internal()
            }
            ServerError::Task(e) => {
                tracing::error!("Background task failed: {:?}", e);
                internal()
            }
        }
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        INTERNAL_ERROR_MESSAGE.to_string(),
    )
}

impl From<TuneError> for ServerError {
    fn from(err: TuneError) -> Self {
        match err {
            TuneError::MissingField { entity, field } => {
                ServerError::BadRequest(missing_field_message(entity, field))
            }
            TuneError::Duplicate(entity) => ServerError::Conflict(duplicate_message(entity)),
            TuneError::NotFound { entity, .. } => ServerError::NotFound(not_found_message(entity)),
            TuneError::InvalidEmail => ServerError::BadRequest("Email invalide !".to_string()),
            TuneError::WeakPassword => ServerError::BadRequest(
                "Mot de passe ≥ 8 caractères, avec 1 majuscule et 1 chiffre !".to_string(),
            ),
        }
    }
}

impl From<StorageError> for ServerError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Domain(e) => e.into(),
            other => ServerError::Storage(other),
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        ServerError::BadRequest("Corps de requête JSON invalide".to_string())
    }
}

fn missing_field_message(entity: EntityKind, field: &str) -> String {
    match (entity, field) {
        (EntityKind::User, _) => "Tous les champs sont requis !".to_string(),
        (EntityKind::Favorite, "music") => "Nom de la musique obligatoire".to_string(),
        (EntityKind::Playlist, "name") => "Le nom de la playlist est requis".to_string(),
        (EntityKind::Track, "music") => "Le nom de la musique est requis".to_string(),
        (EntityKind::Album, "title") => "Le titre de l'album est requis".to_string(),
        (_, field) => format!("Champ requis manquant : {}", field),
    }
}

fn duplicate_message(entity: EntityKind) -> String {
    match entity {
        EntityKind::User => "Email déjà utilisé !",
        EntityKind::Favorite => "Déjà dans les favoris",
        EntityKind::Playlist => "Cette playlist existe déjà",
        EntityKind::Track => "Cette musique est déjà dans la playlist",
        EntityKind::Album => "Cet album existe déjà",
    }
    .to_string()
}

fn not_found_message(entity: EntityKind) -> String {
    match entity {
        EntityKind::User => "Email introuvable !",
        EntityKind::Favorite => "Favori non trouvé",
        EntityKind::Playlist => "Playlist non trouvée",
        EntityKind::Track => "Musique non trouvée dans la playlist",
        EntityKind::Album => "Album non trouvé",
    }
    .to_string()
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.status_and_message();

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Error for the account routes, rendered as `{ "success": false, "message" }`
#[derive(Debug)]
pub struct AccountError(pub ServerError);

impl<E> From<E> for AccountError
where
    E: Into<ServerError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let (status, message) = self.0.status_and_message();

        let body = Json(json!({
            "success": false,
            "message": message,
        }));

        (status, body).into_response()
    }
}
