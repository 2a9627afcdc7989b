//! Override queue
//!
//! Tracks waiting here play before any playlist or catalog traversal, and
//! only `next` consults them.

use cadence_core::Track;
use std::collections::VecDeque;

/// Transient play queue, consumed front to back
///
/// ```text
/// Currently Playing: Track A
/// ─────────────────────────────
/// Queue (consumed by `next`):
///   - Track B
///   - Track C
/// ─────────────────────────────
/// Playlist context / catalog order
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlayQueue {
    tracks: VecDeque<Track>,
}

impl PlayQueue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add track to end of queue
    pub fn push(&mut self, track: Track) {
        self.tracks.push_back(track);
    }

    /// Replace the whole queue
    pub fn replace(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks.into();
    }

    /// Remove and return the head
    ///
    /// Each entry is handed out exactly once.
    pub fn pop_next(&mut self) -> Option<Track> {
        self.tracks.pop_front()
    }

    /// Remove track from queue by index
    ///
    /// Returns the removed track if successful
    pub fn remove(&mut self, index: usize) -> Option<Track> {
        self.tracks.remove(index)
    }

    /// Clear entire queue
    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Get all tracks in queue order
    pub fn get_all(&self) -> Vec<&Track> {
        self.tracks.iter().collect()
    }

    /// Total number of tracks in queue
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
