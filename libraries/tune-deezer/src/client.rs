//! Deezer API client.

use crate::error::{DeezerError, Result};
use crate::types::{ClientConfig, SearchKind, CHART_LIMIT, SEARCH_LIMIT};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Thin proxy client for the Deezer public API.
///
/// Every call is a fresh round trip: no retries, no caching. Successful
/// responses are returned as raw JSON so they can be passed through to
/// callers verbatim.
///
/// # Example
///
/// ```ignore
/// use tune_deezer::{ClientConfig, DeezerClient};
///
/// let client = DeezerClient::new(ClientConfig::default())?;
/// let chart = client.chart_tracks().await?;
/// println!("{} tracks", chart["data"].as_array().map_or(0, Vec::len));
/// ```
#[derive(Debug, Clone)]
pub struct DeezerClient {
    http: Client,
    base_url: Url,
}

impl DeezerClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(DeezerError::InvalidUrl("URL cannot be empty".into()));
        }
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(DeezerError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        // Trailing slash so joins append to the base path instead of replacing it
        let normalized = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalized).map_err(|e| DeezerError::InvalidUrl(e.to_string()))?;

        let mut builder = Client::builder().user_agent(format!(
            "TuneCatalog/{} (Server)",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self { http, base_url })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Forward a GET request for `path` with `query` to the upstream API.
    ///
    /// Non-success statuses become [`DeezerError::Upstream`]; the body of a
    /// successful response is returned unmodified.
    pub async fn forward(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| DeezerError::InvalidUrl(e.to_string()))?;

        debug!(url = %url, "Forwarding request upstream");

        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DeezerError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| DeezerError::ParseError(e.to_string()))
    }

    /// Current top tracks chart.
    pub async fn chart_tracks(&self) -> Result<Value> {
        self.forward("chart/0/tracks", &[("limit", CHART_LIMIT.to_string())])
            .await
    }

    /// Popular playlists, found by searching for "top".
    pub async fn top_playlists(&self) -> Result<Value> {
        self.forward(
            "search/playlist",
            &[("q", "top".to_string()), ("limit", SEARCH_LIMIT.to_string())],
        )
        .await
    }

    /// Search the catalog.
    pub async fn search(&self, query: &str, kind: SearchKind) -> Result<Value> {
        self.forward(
            &format!("search/{}", kind.as_str()),
            &[("q", query.to_string()), ("limit", SEARCH_LIMIT.to_string())],
        )
        .await
    }

    /// Playlist details.
    pub async fn playlist(&self, id: u64) -> Result<Value> {
        self.forward(&format!("playlist/{}", id), &[]).await
    }

    /// Tracks of a playlist.
    pub async fn playlist_tracks(&self, id: u64) -> Result<Value> {
        self.forward(&format!("playlist/{}/tracks", id), &[]).await
    }
}
