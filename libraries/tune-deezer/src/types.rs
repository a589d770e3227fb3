//! Client configuration and request types.

use crate::error::DeezerError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Public Deezer API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.deezer.com";

/// Number of chart tracks requested.
pub const CHART_LIMIT: u32 = 50;

/// Number of results requested for searches.
pub const SEARCH_LIMIT: u32 = 20;

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the upstream API
    pub base_url: String,

    /// Overall request timeout; `None` keeps the HTTP client's default
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: None,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Kinds of object the upstream search endpoint can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchKind {
    #[default]
    Track,
    Album,
    Artist,
    Playlist,
    Radio,
    User,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Track => "track",
            SearchKind::Album => "album",
            SearchKind::Artist => "artist",
            SearchKind::Playlist => "playlist",
            SearchKind::Radio => "radio",
            SearchKind::User => "user",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchKind {
    type Err = DeezerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "track" => Ok(SearchKind::Track),
            "album" => Ok(SearchKind::Album),
            "artist" => Ok(SearchKind::Artist),
            "playlist" => Ok(SearchKind::Playlist),
            "radio" => Ok(SearchKind::Radio),
            "user" => Ok(SearchKind::User),
            other => Err(DeezerError::InvalidSearchType(other.to_string())),
        }
    }
}
