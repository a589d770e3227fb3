//! Tune Catalog Storage
//!
//! Flat JSON file persistence for users, favorites, playlists and albums.
//!
//! # Architecture
//!
//! - **File Store**: one pretty-printed JSON document per resource, replaced
//!   atomically on every write
//! - **Collections**: read-modify-write cycles serialized per resource file
//! - **Vertical Slicing**: each resource owns its validation, duplicate rule
//!   and id allocation
//!
//! # Example
//!
//! ```rust,no_run
//! use tune_core::CreatePlaylist;
//! use tune_storage::{StorageContext, StoragePaths};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = StorageContext::new(StoragePaths::in_dir("./data"));
//! storage.initialize().await?;
//!
//! let playlist = tune_storage::playlists::create(
//!     storage.playlists(),
//!     CreatePlaylist {
//!         name: Some("Road Trip".to_string()),
//!         description: None,
//!     },
//! )
//! .await?;
//! assert_eq!(playlist.id, 1);
//! # Ok(())
//! # }
//! ```

mod collection;
mod context;
mod error;
mod file_store;

// Vertical slices
pub mod albums;
pub mod favorites;
pub mod playlists;
pub mod users;

pub use collection::{next_id, Collection};
pub use context::{
    FileStatus, StorageContext, StoragePaths, ALBUMS_FILE, FAVORITES_FILE, PLAYLISTS_FILE,
    USERS_FILE,
};
pub use error::{Result, StorageError};
pub use file_store::FileStore;
