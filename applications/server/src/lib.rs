//! Tune Catalog Server Library
//!
//! HTTP backend for a small music catalog: accounts, favorites, playlists and
//! saved albums kept in flat JSON files, plus a pass-through proxy to the
//! Deezer public API.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use api::create_router;
pub use config::ServerConfig;
pub use error::{AccountError, Result, ServerError};
pub use services::AuthService;
pub use state::AppState;
