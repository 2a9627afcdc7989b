/// Track domain type
use crate::error::{CoreError, Result};
use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Catalog track
///
/// Immutable once created; playlists, the queue and the history hold clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Track duration in whole seconds
    #[serde(rename = "duration")]
    pub duration_secs: u32,

    /// Cover artwork locator
    #[serde(default)]
    pub cover_url: String,

    /// Audio locator (opaque, never decoded)
    #[serde(default)]
    pub audio_url: String,

    /// Genre
    #[serde(default)]
    pub genre: String,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        duration_secs: u32,
    ) -> Self {
        Self {
            id: TrackId::new(id),
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            duration_secs,
            cover_url: String::new(),
            audio_url: String::new(),
            genre: String::new(),
        }
    }

    /// Set the cover artwork locator
    pub fn with_cover(mut self, cover_url: impl Into<String>) -> Self {
        self.cover_url = cover_url.into();
        self
    }

    /// Set the audio locator
    pub fn with_audio(mut self, audio_url: impl Into<String>) -> Self {
        self.audio_url = audio_url.into();
        self
    }

    /// Set the genre
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Get the track duration as a Duration
    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration_secs))
    }

    /// Check the track is playable
    ///
    /// Durations must be positive and ids non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(CoreError::invalid_input("track id must not be empty"));
        }
        if self.duration_secs == 0 {
            return Err(CoreError::invalid_input(format!(
                "track {} has a zero duration",
                self.id
            )));
        }
        Ok(())
    }
}
