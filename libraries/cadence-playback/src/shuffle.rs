//! Shuffle for the override queue
//!
//! Uniform random permutation (Fisher-Yates via `SliceRandom`).

use cadence_core::{Track, TrackId};
use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle tracks in place
///
/// Each permutation is equally likely.
pub fn shuffle_tracks<R: Rng + ?Sized>(tracks: &mut [Track], rng: &mut R) {
    tracks.shuffle(rng);
}

/// Shuffled copy of `tracks` without any entry matching `exclude`
pub fn shuffled_without<R: Rng + ?Sized>(
    tracks: &[Track],
    exclude: Option<&TrackId>,
    rng: &mut R,
) -> Vec<Track> {
    let mut remaining: Vec<Track> = tracks
        .iter()
        .filter(|t| Some(&t.id) != exclude)
        .cloned()
        .collect();
    shuffle_tracks(&mut remaining, rng);
    remaining
}
