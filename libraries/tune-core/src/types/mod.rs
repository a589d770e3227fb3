//! Domain types for Tune Catalog

mod album;
mod favorite;
mod playlist;
mod user;

pub use album::{Album, AlbumId, CreateAlbum};
pub use favorite::{CreateFavorite, Favorite, FavoriteId};
pub use playlist::{AddTrack, CreatePlaylist, Playlist, PlaylistId, Track, TrackId, UpdatePlaylist};
pub use user::{CreateUser, User, UserId, UserSummary};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label stored when a track or favorite arrives without an album
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// Label stored when a track, favorite or album arrives without an artist
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// The kinds of entity the catalog persists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    User,
    Favorite,
    Playlist,
    /// A track embedded in a playlist
    Track,
    Album,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "User",
            EntityKind::Favorite => "Favorite",
            EntityKind::Playlist => "Playlist",
            EntityKind::Track => "Track",
            EntityKind::Album => "Album",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entities carrying a positive integer id, unique within their collection
pub trait Identified {
    /// The entity's id
    fn id(&self) -> u64;
}

/// Trim a required text field, treating blank input as absent
pub fn required_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Trim an optional label, substituting `fallback` when absent or blank
pub fn label_or(value: Option<String>, fallback: &str) -> String {
    required_text(value.as_deref()).unwrap_or_else(|| fallback.to_string())
}

/// Same music by title, or by upstream id when both sides carry one
pub(crate) fn same_music(
    music: &str,
    deezer_id: Option<i64>,
    other_music: &str,
    other_deezer_id: Option<i64>,
) -> bool {
    if music == other_music {
        return true;
    }
    matches!((deezer_id, other_deezer_id), (Some(a), Some(b)) if a == b)
}
