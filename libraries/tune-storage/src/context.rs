use crate::collection::Collection;
use crate::error::Result;
use crate::file_store::FileStore;
use crate::playlists::PlaylistDocument;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tune_core::{Album, Favorite, User};

pub const USERS_FILE: &str = "users.json";
pub const FAVORITES_FILE: &str = "favorites.json";
pub const PLAYLISTS_FILE: &str = "db.json";
pub const ALBUMS_FILE: &str = "albums.json";

/// Location of every collection file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub users: PathBuf,
    pub favorites: PathBuf,
    pub playlists: PathBuf,
    pub albums: PathBuf,
}

impl StoragePaths {
    /// Default file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            users: dir.join(USERS_FILE),
            favorites: dir.join(FAVORITES_FILE),
            playlists: dir.join(PLAYLISTS_FILE),
            albums: dir.join(ALBUMS_FILE),
        }
    }
}

/// Existence of each collection file, as reported by the health check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileStatus {
    pub db: bool,
    pub users: bool,
    pub favorites: bool,
    pub albums: bool,
}

/// Handles to every collection, built from injected paths
#[derive(Debug)]
pub struct StorageContext {
    users: Collection<Vec<User>>,
    favorites: Collection<Vec<Favorite>>,
    playlists: Collection<PlaylistDocument>,
    albums: Collection<Vec<Album>>,
}

impl StorageContext {
    pub fn new(paths: StoragePaths) -> Self {
        Self {
            users: Collection::new(FileStore::new(paths.users)),
            favorites: Collection::new(FileStore::new(paths.favorites)),
            playlists: Collection::new(FileStore::new(paths.playlists)),
            albums: Collection::new(FileStore::new(paths.albums)),
        }
    }

    /// Create any missing collection file with its default document
    ///
    /// Fails if an existing file is corrupt.
    pub async fn initialize(&self) -> Result<()> {
        self.playlists.initialize().await?;
        self.albums.initialize().await?;
        self.favorites.initialize().await?;
        self.users.initialize().await?;
        Ok(())
    }

    pub fn users(&self) -> &Collection<Vec<User>> {
        &self.users
    }

    pub fn favorites(&self) -> &Collection<Vec<Favorite>> {
        &self.favorites
    }

    pub fn playlists(&self) -> &Collection<PlaylistDocument> {
        &self.playlists
    }

    pub fn albums(&self) -> &Collection<Vec<Album>> {
        &self.albums
    }

    pub async fn file_status(&self) -> FileStatus {
        FileStatus {
            db: self.playlists.exists().await,
            users: self.users.exists().await,
            favorites: self.favorites.exists().await,
            albums: self.albums.exists().await,
        }
    }
}
