/// Album domain types
use super::Identified;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Album identifier
pub type AlbumId = u64;

/// Album saved to the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,

    /// Cover art URL
    pub cover: Option<String>,

    /// Release year
    pub year: Option<i32>,

    pub added_at: DateTime<Utc>,
}

impl Album {
    /// Albums are unique by title and artist
    pub fn is_same_album(&self, title: &str, artist: &str) -> bool {
        self.title == title && self.artist == artist
    }
}

impl Identified for Album {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Request payload for saving an album
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAlbum {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub cover: Option<String>,
    pub year: Option<i32>,
}
