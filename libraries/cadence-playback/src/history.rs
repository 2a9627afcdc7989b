//! Recently played tracking
//!
//! Maintains a bounded, deduplicated list of started tracks

use cadence_core::Track;
use std::collections::VecDeque;

/// Number of tracks kept in the recently played list
pub const RECENTLY_PLAYED_CAPACITY: usize = 10;

/// Recently played tracks with bounded size
///
/// Most recent first. Starting a track that is already listed moves it to the
/// front instead of adding a second entry, and the oldest entry is discarded
/// once `RECENTLY_PLAYED_CAPACITY` is reached.
#[derive(Debug, Clone)]
pub struct RecentlyPlayed {
    /// History buffer (most recent = front)
    tracks: VecDeque<Track>,
}

impl RecentlyPlayed {
    /// Create empty history
    pub fn new() -> Self {
        Self {
            tracks: VecDeque::with_capacity(RECENTLY_PLAYED_CAPACITY),
        }
    }

    /// Create history from tracks listed most recent first
    ///
    /// Duplicates and anything past the capacity are dropped.
    pub fn seeded<'a>(tracks: impl IntoIterator<Item = &'a Track>) -> Self {
        let tracks: Vec<&Track> = tracks.into_iter().collect();
        let mut history = Self::new();
        for track in tracks.into_iter().rev() {
            history.record(track.clone());
        }
        history
    }

    /// Record that a track started
    pub fn record(&mut self, track: Track) {
        self.tracks.retain(|t| t.id != track.id);
        self.tracks.push_front(track);
        self.tracks.truncate(RECENTLY_PLAYED_CAPACITY);
    }

    /// All tracks, most recent first
    pub fn get_all(&self) -> Vec<&Track> {
        self.tracks.iter().collect()
    }

    /// Get number of tracks in history
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if history is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl Default for RecentlyPlayed {
    fn default() -> Self {
        Self::new()
    }
}
