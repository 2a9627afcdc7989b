//! Cadence Core
//!
//! Platform-agnostic domain types, error handling and the catalog provider for Cadence.
//!
//! This crate provides the foundational building blocks shared by the playback
//! controller and the display layers.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist` and their identifiers
//! - **Catalog**: the read-only `CatalogProvider` trait and `StaticCatalog`
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use cadence_core::{CatalogProvider, Playlist, StaticCatalog, UserId};
//!
//! // Built-in sample catalog
//! let catalog = StaticCatalog::sample();
//! assert_eq!(catalog.tracks().len(), 8);
//!
//! // Create a playlist owned by a user
//! let mut playlist = Playlist::new(UserId::new("user"), "Road Trip", "Long drives");
//! playlist.push(catalog.tracks()[0].clone());
//! assert_eq!(playlist.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use catalog::{CatalogProvider, StaticCatalog};
pub use error::{CoreError, Result};
pub use types::{Playlist, PlaylistId, Track, TrackId, UserId, DEFAULT_PLAYLIST_COVER};
