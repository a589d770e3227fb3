//! Whole-file JSON documents
//!
//! Each resource collection lives in a single JSON file. Reads distinguish a
//! missing file (initialized with the default document) from a corrupt one
//! (reported as [`StorageError::Corrupt`]). Writes go to a sibling temporary
//! file which is synced and renamed over the target, so a crash mid-write
//! leaves the previous document in place.

use crate::error::{Result, StorageError};
use serde::{de::DeserializeOwned, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tokio::io::AsyncWriteExt;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// One JSON document on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists
    pub async fn exists(&self) -> bool {
        fs::try_exists(&self.path).await.unwrap_or(false)
    }

    /// Read the document, or `None` if the file is missing or empty
    ///
    /// Never writes, so it is safe outside the collection's writer lock.
    pub async fn read<D>(&self) -> Result<Option<D>>
    where
        D: DeserializeOwned,
    {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice(&bytes).map(Some).map_err(|e| {
            tracing::error!("Collection file {} is corrupt: {}", self.path.display(), e);
            StorageError::corrupt(&self.path, e)
        })
    }

    /// Read the document, writing and returning `default()` if the file is
    /// missing or empty
    ///
    /// Callers must hold the collection's writer lock.
    pub async fn read_or_init<D, F>(&self, default: F) -> Result<D>
    where
        D: Serialize + DeserializeOwned,
        F: FnOnce() -> D,
    {
        if let Some(document) = self.read().await? {
            return Ok(document);
        }

        let document = default();
        self.write(&document).await?;
        tracing::info!("Initialized collection file {}", self.path.display());
        Ok(document)
    }

    /// Replace the file's contents with the pretty-printed document
    pub async fn write<D: Serialize>(&self, document: &D) -> Result<()> {
        let mut data = serde_json::to_vec_pretty(document)?;
        data.push(b'\n');

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let temp_path = self.temp_path();
        let result = async {
            let mut file = fs::File::create(&temp_path).await?;
            file.write_all(&data).await?;
            file.sync_all().await?;
            drop(file);
            fs::rename(&temp_path, &self.path).await
        }
        .await;

        if let Err(e) = result {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        Ok(())
    }

    /// Unique sibling path, so the final rename never crosses filesystems
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "collection".to_string());
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        self.path
            .with_file_name(format!(".{}.{}.{}.tmp", name, std::process::id(), counter))
    }
}
