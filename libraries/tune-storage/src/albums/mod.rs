//! Saved albums

use crate::{next_id, Collection, Result};
use chrono::Utc;
use tune_core::types::{label_or, required_text, UNKNOWN_ARTIST};
use tune_core::{Album, AlbumId, CreateAlbum, EntityKind, TuneError};

type Albums = Collection<Vec<Album>>;

/// Get all albums
pub async fn get_all(albums: &Albums) -> Result<Vec<Album>> {
    albums.load().await
}

/// Get an album by id
pub async fn get_by_id(albums: &Albums, id: AlbumId) -> Result<Album> {
    albums
        .load()
        .await?
        .into_iter()
        .find(|a| a.id == id)
        .ok_or_else(|| TuneError::not_found(EntityKind::Album, id).into())
}

/// Save an album; the same title by the same artist is rejected
pub async fn create(albums: &Albums, new_album: CreateAlbum) -> Result<Album> {
    let title = required_text(new_album.title.as_deref())
        .ok_or_else(|| TuneError::missing_field(EntityKind::Album, "title"))?;
    let artist = label_or(new_album.artist, UNKNOWN_ARTIST);

    let album = albums
        .update(|all| {
            if all.iter().any(|a| a.is_same_album(&title, &artist)) {
                return Err(TuneError::Duplicate(EntityKind::Album));
            }

            let album = Album {
                id: next_id(all.iter()),
                title,
                artist,
                cover: required_text(new_album.cover.as_deref()),
                year: new_album.year,
                added_at: Utc::now(),
            };
            all.push(album.clone());
            Ok(album)
        })
        .await?;

    tracing::info!("Saved album {}: {} - {}", album.id, album.artist, album.title);
    Ok(album)
}

/// Delete an album
pub async fn delete(albums: &Albums, id: AlbumId) -> Result<()> {
    albums
        .update(|all| {
            let before = all.len();
            all.retain(|a| a.id != id);
            if all.len() == before {
                return Err(TuneError::not_found(EntityKind::Album, id));
            }
            Ok(())
        })
        .await?;

    tracing::info!("Deleted album {}", id);
    Ok(())
}
