//! Cadence - Playback Management
//!
//! Playback and queue controller for the Cadence music player.
//!
//! This crate provides:
//! - Play, pause, resume and skip with a three-tier traversal order
//!   (override queue, playlist context, catalog)
//! - Shuffle of the playlist context into the queue
//! - Recently played history (bounded, deduplicated)
//! - Favorites and user playlists
//! - Volume control (0-100%, mute/unmute)
//! - A simulated progress clock driven by a Tokio ticker
//!
//! # Architecture
//!
//! `PlaybackController` is synchronous and owns all state. No audio is
//! decoded; progress is simulated. `PlaybackSession` shares the controller
//! with a background ticker so that ticks and user operations never race.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use cadence_core::{StaticCatalog, TrackId, UserId};
//! use cadence_playback::{PlaybackConfig, PlaybackController, PlaybackStatus};
//!
//! let catalog = StaticCatalog::sample();
//! let mut controller =
//!     PlaybackController::new(PlaybackConfig::default(), &catalog, UserId::new("user"));
//!
//! controller.play_track(&TrackId::new("1")).unwrap();
//! assert_eq!(controller.status(), PlaybackStatus::Playing);
//!
//! // Queue overrides the catalog order
//! controller.enqueue_track(&TrackId::new("5")).unwrap();
//! controller.next().unwrap();
//! assert_eq!(controller.current_track().unwrap().id.as_str(), "5");
//!
//! controller.pause();
//! assert_eq!(controller.status(), PlaybackStatus::Paused);
//! ```
//!
//! # Example: Playlists and Shuffle
//!
//! ```rust
//! use cadence_core::{PlaylistId, StaticCatalog, UserId};
//! use cadence_playback::{PlaybackConfig, PlaybackController};
//!
//! let catalog = StaticCatalog::sample();
//! let mut controller =
//!     PlaybackController::new(PlaybackConfig::default(), &catalog, UserId::new("user"));
//!
//! controller.play_playlist(&PlaylistId::new("2"), 0).unwrap();
//! let queued = controller.shuffle_queue().unwrap();
//! assert_eq!(queued, 4);
//! ```

mod controller;
mod error;
mod events;
mod favorites;
mod history;
mod library;
mod progress;
mod queue;
mod session;
mod shuffle;
pub mod types;
mod volume;

// Public exports
pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use favorites::Favorites;
pub use history::{RecentlyPlayed, RECENTLY_PLAYED_CAPACITY};
pub use library::PlaylistLibrary;
pub use progress::{format_time, ProgressClock};
pub use queue::PlayQueue;
pub use session::PlaybackSession;
pub use shuffle::{shuffle_tracks, shuffled_without};
pub use types::{PlaybackConfig, PlaybackSnapshot, PlaybackStatus};
pub use volume::Volume;
