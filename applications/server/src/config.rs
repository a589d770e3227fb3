/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tune_deezer::ClientConfig;
use tune_storage::{StoragePaths, ALBUMS_FILE, FAVORITES_FILE, PLAYLISTS_FILE, USERS_FILE};

/// Work factor bounds accepted by bcrypt
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,

    #[serde(default = "default_deezer")]
    pub deezer: DeezerSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_users_file")]
    pub users_file: String,

    #[serde(default = "default_favorites_file")]
    pub favorites_file: String,

    #[serde(default = "default_playlists_file")]
    pub playlists_file: String,

    #[serde(default = "default_albums_file")]
    pub albums_file: String,
}

impl StorageSettings {
    /// Collection file locations handed to the storage layer
    pub fn paths(&self) -> StoragePaths {
        StoragePaths {
            users: self.data_dir.join(&self.users_file),
            favorites: self.data_dir.join(&self.favorites_file),
            playlists: self.data_dir.join(&self.playlists_file),
            albums: self.data_dir.join(&self.albums_file),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeezerSettings {
    #[serde(default = "default_deezer_base_url")]
    pub base_url: String,

    /// No timeout override unless set
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl DeezerSettings {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Reads `path` when given, otherwise `config.toml` in the working
    /// directory if it exists. `TUNE_`-prefixed environment variables
    /// override file values, with `__` between nested keys
    /// (`TUNE_SERVER__PORT=8080`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                // Load from config file if it exists
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (prefixed with TUNE_)
        settings = settings.add_source(
            config::Environment::with_prefix("TUNE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(ServerError::Config("Server host is required".to_string()));
        }

        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.auth.bcrypt_cost) {
            return Err(ServerError::Config(format!(
                "bcrypt cost must be between {} and {} (got {})",
                MIN_BCRYPT_COST,
                MAX_BCRYPT_COST,
                self.auth.bcrypt_cost
            )));
        }

        let base_url = &self.deezer.base_url;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ServerError::Config(format!(
                "Deezer base URL must start with http:// or https:// (got {:?})",
                base_url
            )));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        data_dir: default_data_dir(),
        users_file: default_users_file(),
        favorites_file: default_favorites_file(),
        playlists_file: default_playlists_file(),
        albums_file: default_albums_file(),
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_users_file() -> String {
    USERS_FILE.to_string()
}

fn default_favorites_file() -> String {
    FAVORITES_FILE.to_string()
}

fn default_playlists_file() -> String {
    PLAYLISTS_FILE.to_string()
}

fn default_albums_file() -> String {
    ALBUMS_FILE.to_string()
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        bcrypt_cost: default_bcrypt_cost(),
    }
}

fn default_bcrypt_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

fn default_deezer() -> DeezerSettings {
    DeezerSettings {
        base_url: default_deezer_base_url(),
        request_timeout_secs: None,
    }
}

fn default_deezer_base_url() -> String {
    tune_deezer::DEFAULT_BASE_URL.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            auth: default_auth(),
            deezer: default_deezer(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ServerConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.auth.bcrypt_cost, bcrypt::DEFAULT_COST);
        assert!(config.deezer.request_timeout_secs.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_storage_paths_use_data_dir() {
        let mut config = ServerConfig::default();
        config.storage.data_dir = PathBuf::from("/srv/tune");

        let paths = config.storage.paths();
        assert_eq!(paths.playlists, PathBuf::from("/srv/tune/db.json"));
        assert_eq!(paths.users, PathBuf::from("/srv/tune/users.json"));
    }

    #[test]
    fn test_validate_rejects_bad_cost() {
        let mut config = ServerConfig::default();
        config.auth.bcrypt_cost = 2;
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = ServerConfig::default();
        config.deezer.base_url = "api.deezer.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("tune.toml");
        std::fs::write(
            &path,
            "[server]\nport = 4000\n\n[storage]\ndata_dir = \"/var/lib/tune\"\n\n[deezer]\nrequest_timeout_secs = 5\n",
        )
        .unwrap();

        let config = ServerConfig::load(Some(&path)).unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.storage.data_dir, PathBuf::from("/var/lib/tune"));
        assert_eq!(
            config.deezer.client_config().request_timeout,
            Some(Duration::from_secs(5))
        );
    }
}
