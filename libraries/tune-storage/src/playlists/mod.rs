//! Playlists and their embedded tracks
//!
//! All playlists share one document, `{ "playlists": [...] }`. Track ids are
//! allocated per playlist.

use crate::{next_id, Collection, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tune_core::types::{label_or, required_text, UNKNOWN_ALBUM, UNKNOWN_ARTIST};
use tune_core::{
    AddTrack, CreatePlaylist, EntityKind, Playlist, PlaylistId, Track, TrackId, TuneError,
    UpdatePlaylist,
};

/// On-disk shape of the playlists file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistDocument {
    #[serde(default)]
    pub playlists: Vec<Playlist>,
}

impl PlaylistDocument {
    fn find_mut(&mut self, id: PlaylistId) -> std::result::Result<&mut Playlist, TuneError> {
        self.playlists
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| TuneError::not_found(EntityKind::Playlist, id))
    }
}

type Playlists = Collection<PlaylistDocument>;

/// Get all playlists with their tracks
pub async fn get_all(playlists: &Playlists) -> Result<Vec<Playlist>> {
    Ok(playlists.load().await?.playlists)
}

/// Get a playlist by id
pub async fn get_by_id(playlists: &Playlists, id: PlaylistId) -> Result<Playlist> {
    playlists
        .load()
        .await?
        .playlists
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| TuneError::not_found(EntityKind::Playlist, id).into())
}

/// Create an empty playlist
pub async fn create(playlists: &Playlists, new_playlist: CreatePlaylist) -> Result<Playlist> {
    let name = required_text(new_playlist.name.as_deref())
        .ok_or_else(|| TuneError::missing_field(EntityKind::Playlist, "name"))?;

    let playlist = playlists
        .update(|doc| {
            let now = Utc::now();
            let playlist = Playlist {
                id: next_id(doc.playlists.iter()),
                name,
                description: new_playlist.description.unwrap_or_default(),
                musics: Vec::new(),
                created_at: now,
                updated_at: now,
            };
            doc.playlists.push(playlist.clone());
            Ok(playlist)
        })
        .await?;

    tracing::info!("Created playlist {}: {}", playlist.id, playlist.name);
    Ok(playlist)
}

/// Update a playlist's name and/or description
///
/// Fields left as `None` are not touched. A supplied name must not be blank.
/// An empty patch changes nothing, `updatedAt` included.
pub async fn update(
    playlists: &Playlists,
    id: PlaylistId,
    patch: UpdatePlaylist,
) -> Result<Playlist> {
    if patch.is_empty() {
        return get_by_id(playlists, id).await;
    }

    let name = match patch.name.as_deref() {
        Some(raw) => Some(
            required_text(Some(raw))
                .ok_or_else(|| TuneError::missing_field(EntityKind::Playlist, "name"))?,
        ),
        None => None,
    };

    let playlist = playlists
        .update(|doc| {
            let playlist = doc.find_mut(id)?;
            if let Some(name) = name {
                playlist.name = name;
            }
            if let Some(description) = patch.description {
                playlist.description = description;
            }
            playlist.touch();
            Ok(playlist.clone())
        })
        .await?;

    tracing::info!("Updated playlist {}", id);
    Ok(playlist)
}

/// Delete a playlist and its tracks
pub async fn delete(playlists: &Playlists, id: PlaylistId) -> Result<()> {
    playlists
        .update(|doc| {
            let before = doc.playlists.len();
            doc.playlists.retain(|p| p.id != id);
            if doc.playlists.len() == before {
                return Err(TuneError::not_found(EntityKind::Playlist, id));
            }
            Ok(())
        })
        .await?;

    tracing::info!("Deleted playlist {}", id);
    Ok(())
}

/// Append a track to a playlist
///
/// Rejected when the playlist already holds the same music title or the same
/// non-null Deezer id.
pub async fn add_track(
    playlists: &Playlists,
    playlist_id: PlaylistId,
    new_track: AddTrack,
) -> Result<Track> {
    let music = required_text(new_track.music.as_deref())
        .ok_or_else(|| TuneError::missing_field(EntityKind::Track, "music"))?;

    let (track, playlist_name) = playlists
        .update(|doc| {
            let playlist = doc.find_mut(playlist_id)?;
            if playlist.find_duplicate(&music, new_track.deezer_id).is_some() {
                return Err(TuneError::Duplicate(EntityKind::Track));
            }

            let track = Track {
                id: next_id(playlist.musics.iter()),
                music,
                artist: label_or(new_track.artist, UNKNOWN_ARTIST),
                album: label_or(new_track.album, UNKNOWN_ALBUM),
                deezer_id: new_track.deezer_id,
                preview: required_text(new_track.preview.as_deref()),
                added_at: Utc::now(),
            };
            playlist.musics.push(track.clone());
            playlist.touch();
            Ok((track, playlist.name.clone()))
        })
        .await?;

    tracing::info!("Added \"{}\" to playlist \"{}\"", track.music, playlist_name);
    Ok(track)
}

/// Remove a track from a playlist
pub async fn remove_track(
    playlists: &Playlists,
    playlist_id: PlaylistId,
    track_id: TrackId,
) -> Result<()> {
    playlists
        .update(|doc| {
            let playlist = doc.find_mut(playlist_id)?;
            let before = playlist.musics.len();
            playlist.musics.retain(|t| t.id != track_id);
            if playlist.musics.len() == before {
                return Err(TuneError::not_found(EntityKind::Track, track_id));
            }
            playlist.touch();
            Ok(())
        })
        .await?;

    tracing::info!("Removed track {} from playlist {}", track_id, playlist_id);
    Ok(())
}
