//! Favorite musics

use crate::{next_id, Collection, Result};
use chrono::Utc;
use tune_core::types::{label_or, required_text, UNKNOWN_ALBUM, UNKNOWN_ARTIST};
use tune_core::{CreateFavorite, EntityKind, Favorite, FavoriteId, TuneError};

type Favorites = Collection<Vec<Favorite>>;

/// Get all favorites in insertion order
pub async fn get_all(favorites: &Favorites) -> Result<Vec<Favorite>> {
    favorites.load().await
}

/// Get a favorite by id
pub async fn get_by_id(favorites: &Favorites, id: FavoriteId) -> Result<Favorite> {
    favorites
        .load()
        .await?
        .into_iter()
        .find(|f| f.id == id)
        .ok_or_else(|| TuneError::not_found(EntityKind::Favorite, id).into())
}

/// Add a favorite
///
/// Rejected when a favorite with the same music title, or the same non-null
/// Deezer id, already exists. Returns the new favorite and the full list.
pub async fn create(
    favorites: &Favorites,
    new_favorite: CreateFavorite,
) -> Result<(Favorite, Vec<Favorite>)> {
    let music = required_text(new_favorite.music.as_deref())
        .ok_or_else(|| TuneError::missing_field(EntityKind::Favorite, "music"))?;

    let (favorite, all) = favorites
        .update(|all| {
            if all
                .iter()
                .any(|f| f.is_same_music(&music, new_favorite.deezer_id))
            {
                return Err(TuneError::Duplicate(EntityKind::Favorite));
            }

            let favorite = Favorite {
                id: next_id(all.iter()),
                music,
                album: label_or(new_favorite.album, UNKNOWN_ALBUM),
                artist: label_or(new_favorite.artist, UNKNOWN_ARTIST),
                deezer_id: new_favorite.deezer_id,
                preview: required_text(new_favorite.preview.as_deref()),
                added_at: Utc::now(),
            };
            all.push(favorite.clone());
            Ok((favorite, all.clone()))
        })
        .await?;

    tracing::info!("Added favorite {}: {}", favorite.id, favorite.music);
    Ok((favorite, all))
}

/// Delete a favorite, returning the remaining favorites
pub async fn delete(favorites: &Favorites, id: FavoriteId) -> Result<Vec<Favorite>> {
    let remaining = favorites
        .update(|all| {
            let before = all.len();
            all.retain(|f| f.id != id);
            if all.len() == before {
                return Err(TuneError::not_found(EntityKind::Favorite, id));
            }
            Ok(all.clone())
        })
        .await?;

    tracing::info!("Deleted favorite {}", id);
    Ok(remaining)
}
