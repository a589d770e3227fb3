/// Playlist domain types
use super::{same_music, Identified};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Playlist identifier
pub type PlaylistId = u64;

/// Track identifier, scoped to its parent playlist
pub type TrackId = u64;

/// Playlist with its embedded, ordered tracks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name (never blank)
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Tracks in play order
    #[serde(default)]
    pub musics: Vec<Track>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Refreshed on every change to the metadata or the track list
    pub updated_at: DateTime<Utc>,
}

impl Playlist {
    /// Find a track already in the playlist that duplicates the candidate
    pub fn find_duplicate(&self, music: &str, deezer_id: Option<i64>) -> Option<&Track> {
        self.musics
            .iter()
            .find(|t| same_music(&t.music, t.deezer_id, music, deezer_id))
    }

    /// Mark the playlist as modified now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Identified for Playlist {
    fn id(&self) -> u64 {
        self.id
    }
}

/// A track inside a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Position-independent id, unique within the playlist
    pub id: TrackId,
    pub music: String,
    pub artist: String,
    pub album: String,
    pub deezer_id: Option<i64>,
    pub preview: Option<String>,
    pub added_at: DateTime<Utc>,
}

impl Identified for Track {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Request payload for creating a playlist
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePlaylist {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Partial update: `None` leaves the field untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlaylist {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdatePlaylist {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// Request payload for adding a track to a playlist
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTrack {
    pub music: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub deezer_id: Option<i64>,
    pub preview: Option<String>,
}
