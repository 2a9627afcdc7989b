//! Core types for playback management

use cadence_core::{PlaylistId, Track, DEFAULT_PLAYLIST_COVER};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Playback status
///
/// Derived from the current track and the play flag, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// No track loaded
    Idle,

    /// Track loaded, not playing
    Paused,

    /// Currently playing
    Playing,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial volume (0-100, default: 75)
    pub volume: u8,

    /// Progress tick period in milliseconds (default: 1000)
    pub tick_interval_ms: u64,

    /// Cover assigned to playlists created at runtime
    pub playlist_cover_url: String,
}

impl PlaybackConfig {
    /// Progress tick period
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 75,
            tick_interval_ms: 1000,
            playlist_cover_url: DEFAULT_PLAYLIST_COVER.to_string(),
        }
    }
}

/// Read-only view of the playback state for display layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Derived status
    pub status: PlaybackStatus,

    /// Currently loaded track
    pub current_track: Option<Track>,

    /// Active playlist context
    pub current_playlist: Option<PlaylistId>,

    /// Index into the active playlist (None without a context)
    pub current_track_index: Option<usize>,

    /// Upcoming override tracks, front first
    pub queue: Vec<Track>,

    /// Most recent first
    pub recently_played: Vec<Track>,

    /// Favorite tracks in insertion order
    pub favorites: Vec<Track>,

    /// Progress through the current track (0-100)
    pub progress_percent: f64,

    /// Elapsed seconds in the current track
    pub elapsed_secs: u32,

    /// Volume level (0-100)
    pub volume: u8,

    /// Whether audio is muted
    pub muted: bool,

    /// Whether shuffle is enabled
    pub shuffled: bool,
}
