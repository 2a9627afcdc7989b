//! Playlist collection
//!
//! Seeded from the catalog, extended at runtime.

use crate::error::{PlaybackError, Result};
use cadence_core::{Playlist, PlaylistId, Track, UserId};
use tracing::info;

/// All playlists known to the controller
#[derive(Debug, Clone, Default)]
pub struct PlaylistLibrary {
    playlists: Vec<Playlist>,
}

impl PlaylistLibrary {
    /// Create a library from seed playlists
    pub fn new(playlists: Vec<Playlist>) -> Self {
        Self { playlists }
    }

    /// Create an empty, private playlist and return its ID
    pub fn create(
        &mut self,
        name: &str,
        description: &str,
        created_by: UserId,
        cover_url: &str,
    ) -> Result<PlaylistId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlaybackError::InvalidInput(
                "playlist name must not be empty".to_string(),
            ));
        }

        let mut playlist = Playlist::new(created_by, name, description.trim());
        playlist.cover_url = cover_url.to_string();
        let id = playlist.id.clone();

        info!("Created playlist {} ({})", playlist.name, id);
        self.playlists.push(playlist);
        Ok(id)
    }

    /// Append a track, returning the new playlist length
    pub fn add_track(&mut self, id: &PlaylistId, track: Track) -> Result<usize> {
        let playlist = self
            .playlists
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| PlaybackError::PlaylistNotFound(id.clone()))?;

        playlist.push(track);
        Ok(playlist.len())
    }

    /// Look up a playlist
    pub fn get(&self, id: &PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| &p.id == id)
    }

    /// Look up a playlist or signal not-found
    pub fn require(&self, id: &PlaylistId) -> Result<&Playlist> {
        self.get(id)
            .ok_or_else(|| PlaybackError::PlaylistNotFound(id.clone()))
    }

    /// All playlists in creation order
    pub fn all(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Check if there are no playlists
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}
