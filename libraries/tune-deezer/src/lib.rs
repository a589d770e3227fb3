//! Deezer API client for Tune Catalog.
//!
//! Forwards chart, search and playlist requests to the Deezer public API and
//! hands back the upstream JSON unmodified, or a [`DeezerError`] carrying the
//! upstream status when there is one.

mod client;
mod error;
mod types;

pub use client::DeezerClient;
pub use error::{DeezerError, Result};
pub use types::{ClientConfig, SearchKind, CHART_LIMIT, DEFAULT_BASE_URL, SEARCH_LIMIT};
