/// Favorite domain types
use super::{same_music, Identified};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Favorite identifier
pub type FavoriteId = u64;

/// A music the user marked as favorite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: FavoriteId,

    /// Title of the music
    pub music: String,

    pub album: String,

    pub artist: String,

    /// Upstream (Deezer) track id, when the favorite came from the catalog
    pub deezer_id: Option<i64>,

    /// URL of a 30 second preview clip
    pub preview: Option<String>,

    pub added_at: DateTime<Utc>,
}

impl Favorite {
    /// Favorites are unique by music title or by non-null upstream id
    pub fn is_same_music(&self, music: &str, deezer_id: Option<i64>) -> bool {
        same_music(&self.music, self.deezer_id, music, deezer_id)
    }
}

impl Identified for Favorite {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Request payload for adding a favorite
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFavorite {
    pub music: Option<String>,
    pub album: Option<String>,
    pub artist: Option<String>,
    pub deezer_id: Option<i64>,
    pub preview: Option<String>,
}
