//! Favorite tracks
//!
//! A set keyed by track ID that remembers insertion order for display.

use cadence_core::{Track, TrackId};

/// User-marked tracks, independent of any playlist
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    tracks: Vec<Track>,
}

impl Favorites {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a track
    ///
    /// Returns false if a track with the same ID was already present.
    pub fn add(&mut self, track: Track) -> bool {
        if self.contains(&track.id) {
            return false;
        }
        self.tracks.push(track);
        true
    }

    /// Remove a track by ID
    ///
    /// Returns false if nothing was removed.
    pub fn remove(&mut self, id: &TrackId) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|t| &t.id != id);
        self.tracks.len() != before
    }

    /// Flip membership, returns whether the track is now a favorite
    pub fn toggle(&mut self, track: Track) -> bool {
        if self.remove(&track.id) {
            false
        } else {
            self.tracks.push(track);
            true
        }
    }

    /// Check membership
    pub fn contains(&self, id: &TrackId) -> bool {
        self.tracks.iter().any(|t| &t.id == id)
    }

    /// Favorites in insertion order
    pub fn get_all(&self) -> Vec<&Track> {
        self.tracks.iter().collect()
    }

    /// Number of favorites
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if there are no favorites
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
