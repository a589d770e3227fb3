//! Tune Catalog Core
//!
//! Domain types, validation predicates and error handling shared by the
//! storage layer, the upstream API client and the HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Favorite`, `Playlist`, `Track`, `Album`
//! - **Input Types**: `CreateFavorite`, `CreatePlaylist`, `UpdatePlaylist`, ...
//! - **Validation**: email shape and password strength checks
//! - **Error Handling**: Unified `TuneError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tune_core::validation::{is_valid_email, is_valid_password};
//!
//! assert!(is_valid_email("alice@example.com"));
//! assert!(!is_valid_password("short"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{Result, TuneError};

pub use types::{
    // Accounts
    CreateUser, User, UserId, UserSummary,
    // Favorites
    CreateFavorite, Favorite, FavoriteId,
    // Playlists
    AddTrack, CreatePlaylist, Playlist, PlaylistId, Track, TrackId, UpdatePlaylist,
    // Albums
    Album, AlbumId, CreateAlbum,
    // Shared
    EntityKind, Identified,
};
