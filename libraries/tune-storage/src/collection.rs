//! Read-modify-write access to one collection document
//!
//! Mutations of a collection are serialized by a per-collection writer lock:
//! the document is loaded, changed and written back while the lock is held,
//! so concurrent creates never allocate the same id or both pass a duplicate
//! check. Reads take no lock and never write; the atomic rename in
//! [`FileStore::write`] means they always observe a whole document.

use crate::error::Result;
use crate::file_store::FileStore;
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use std::path::Path;
use tokio::sync::Mutex;
use tune_core::{Identified, TuneError};

/// A collection document of type `D` backed by one file
#[derive(Debug)]
pub struct Collection<D> {
    file: FileStore,
    writer: Mutex<()>,
    _document: PhantomData<fn() -> D>,
}

impl<D> Collection<D>
where
    D: Serialize + DeserializeOwned + Default,
{
    pub fn new(file: FileStore) -> Self {
        Self {
            file,
            writer: Mutex::new(()),
            _document: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub async fn exists(&self) -> bool {
        self.file.exists().await
    }

    /// Create the backing file with the default document if it is missing
    pub async fn initialize(&self) -> Result<()> {
        let _guard = self.writer.lock().await;
        self.file.read_or_init(D::default).await.map(|_: D| ())
    }

    /// Load the current document
    ///
    /// A missing file reads as the default document but is not written
    /// back; only the writer creates files.
    pub async fn load(&self) -> Result<D> {
        Ok(self.file.read().await?.unwrap_or_default())
    }

    /// Apply `mutate` to the document and persist it
    ///
    /// The file is rewritten only when `mutate` succeeds; a rejected
    /// operation leaves it byte-for-byte unchanged.
    pub async fn update<R, F>(&self, mutate: F) -> Result<R>
    where
        F: FnOnce(&mut D) -> std::result::Result<R, TuneError>,
    {
        let _guard = self.writer.lock().await;
        let mut document = self.file.read_or_init(D::default).await?;
        let output = mutate(&mut document)?;
        self.file.write(&document).await?;
        Ok(output)
    }
}

/// Next id for a collection: one past the largest existing id, or 1
pub fn next_id<'a, T, I>(items: I) -> u64
where
    T: Identified + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(Identified::id).max().unwrap_or(0) + 1
}
