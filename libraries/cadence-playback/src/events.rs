//! Playback Events
//!
//! Event-based communication for display synchronization.
//! Events are emitted at key points:
//! - Status changes (play/pause)
//! - Track changes
//! - Queue, favorites and playlist mutations
//! - Playlist context changes

use crate::types::PlaybackStatus;
use cadence_core::{PlaylistId, TrackId};
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playback status changed
    StateChanged {
        /// The new status
        status: PlaybackStatus,
    },

    /// A track started
    TrackChanged {
        /// ID of the new (current) track
        track_id: TrackId,
        /// ID of the previous track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// Queue changed (tracks added, consumed, removed or shuffled)
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Favorites set changed
    FavoritesChanged {
        /// Track that was added or removed
        track_id: TrackId,
        /// Whether the track is now a favorite
        is_favorite: bool,
    },

    /// A playlist was created
    PlaylistCreated {
        /// ID of the new playlist
        playlist_id: PlaylistId,
    },

    /// A track was appended to a playlist
    PlaylistUpdated {
        /// ID of the playlist
        playlist_id: PlaylistId,
        /// New track count
        length: usize,
    },

    /// The traversal context was set or cleared
    ContextChanged {
        /// Active playlist, if any
        playlist_id: Option<PlaylistId>,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
        /// Whether audio is muted
        is_muted: bool,
    },
}
