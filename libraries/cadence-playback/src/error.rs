//! Error types for playback management

use cadence_core::{CoreError, PlaylistId, TrackId};
use thiserror::Error;

/// Playback errors
///
/// Every error is a signaled no-op: the controller state is left untouched.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No track is currently loaded
    #[error("No track loaded")]
    NoTrackLoaded,

    /// Neither queue, playlist context nor catalog can supply a track
    #[error("Nothing to play")]
    NothingToPlay,

    /// Operation needs an active playlist context
    #[error("No playlist context")]
    NoPlaylistContext,

    /// Playlist has no tracks
    #[error("Playlist is empty: {0}")]
    EmptyPlaylist(PlaylistId),

    /// Index out of bounds
    #[error("Index {index} out of bounds (length {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Track not found
    #[error("Track not found: {0}")]
    TrackNotFound(TrackId),

    /// Playlist not found
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Catalog error
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
