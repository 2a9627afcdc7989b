/// Playlist domain type
use crate::types::{PlaylistId, Track, TrackId, UserId};
use serde::{Deserialize, Serialize};

/// Cover used for playlists created at runtime
pub const DEFAULT_PLAYLIST_COVER: &str =
    "https://images.pexels.com/photos/1105666/pexels-photo-1105666.jpeg?w=400";

/// Named, ordered collection of catalog tracks
///
/// Track order is traversal order. A playlist never owns catalog data, it
/// holds copies of catalog tracks keyed by their ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Cover artwork locator
    pub cover_url: String,

    /// Ordered tracks
    pub tracks: Vec<Track>,

    /// Owner user ID
    pub created_by: UserId,

    /// Whether other users may see the playlist
    pub is_public: bool,
}

impl Playlist {
    /// Create a new, empty and private playlist with a fresh ID
    pub fn new(
        created_by: UserId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            description: description.into(),
            cover_url: DEFAULT_PLAYLIST_COVER.to_string(),
            tracks: Vec::new(),
            created_by,
            is_public: false,
        }
    }

    /// Append a track at the end
    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Track at `index`, if in bounds
    pub fn track_at(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Position of the first track with `id`
    pub fn position_of(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| &t.id == id)
    }

    /// Check whether the playlist holds a track with `id`
    pub fn contains(&self, id: &TrackId) -> bool {
        self.position_of(id).is_some()
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the playlist has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Total running time in seconds
    pub fn total_duration_secs(&self) -> u64 {
        self.tracks.iter().map(|t| u64::from(t.duration_secs)).sum()
    }
}
