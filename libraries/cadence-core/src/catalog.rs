//! Catalog provider
//!
//! The catalog is the read-only source of tracks and seed playlists. It is
//! supplied once at startup and never updated afterwards.

use crate::error::{CoreError, Result};
use crate::types::{Playlist, PlaylistId, Track, TrackId, UserId, DEFAULT_PLAYLIST_COVER};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::ops::Range;
use std::path::Path;
use tracing::info;

/// Read-only source of tracks and playlists
pub trait CatalogProvider {
    /// All catalog tracks in catalog order
    fn tracks(&self) -> &[Track];

    /// Seed playlists
    fn playlists(&self) -> &[Playlist];

    /// Tracks the listener starts out with as favorites
    fn favorites(&self) -> &[Track] {
        &[]
    }

    /// Listening history the listener starts out with, most recent first
    fn recently_played(&self) -> &[Track] {
        &[]
    }

    /// Look up a track by ID
    fn track(&self, id: &TrackId) -> Option<&Track> {
        self.tracks().iter().find(|t| &t.id == id)
    }

    /// Look up a playlist by ID
    fn playlist(&self, id: &PlaylistId) -> Option<&Playlist> {
        self.playlists().iter().find(|p| &p.id == id)
    }
}

/// In-memory catalog
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    tracks: Vec<Track>,
    playlists: Vec<Playlist>,
    favorites: Vec<Track>,
    recently_played: Vec<Track>,
}

/// On-disk catalog layout
///
/// Playlists reference catalog tracks by ID so a playlist can never carry a
/// track the catalog does not know about.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    #[serde(default)]
    tracks: Vec<Track>,
    #[serde(default)]
    playlists: Vec<PlaylistEntry>,
    #[serde(default)]
    favorite_ids: Vec<TrackId>,
    #[serde(default)]
    recently_played_ids: Vec<TrackId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistEntry {
    id: PlaylistId,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    cover_url: Option<String>,
    #[serde(default)]
    track_ids: Vec<TrackId>,
    created_by: UserId,
    #[serde(default)]
    is_public: bool,
}

impl StaticCatalog {
    /// Build a catalog, validating ids and durations
    pub fn new(tracks: Vec<Track>, playlists: Vec<Playlist>) -> Result<Self> {
        let catalog = Self {
            tracks,
            playlists,
            ..Self::default()
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Attach starting favorites and history (most recent first)
    pub fn with_listening_history(
        mut self,
        favorites: Vec<Track>,
        recently_played: Vec<Track>,
    ) -> Result<Self> {
        self.favorites = favorites;
        self.recently_played = recently_played;
        self.validate()?;
        Ok(self)
    }

    /// Empty catalog
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON catalog
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let by_id: HashMap<&TrackId, &Track> = file.tracks.iter().map(|t| (&t.id, t)).collect();
        let resolve = |ids: &[TrackId]| -> Result<Vec<Track>> {
            ids.iter()
                .map(|id| {
                    by_id
                        .get(id)
                        .map(|t| (*t).clone())
                        .ok_or_else(|| CoreError::TrackNotFound(id.clone()))
                })
                .collect()
        };

        let mut playlists = Vec::with_capacity(file.playlists.len());
        for entry in &file.playlists {
            let tracks = resolve(&entry.track_ids)?;

            playlists.push(Playlist {
                id: entry.id.clone(),
                name: entry.name.clone(),
                description: entry.description.clone(),
                cover_url: entry
                    .cover_url
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PLAYLIST_COVER.to_string()),
                tracks,
                created_by: entry.created_by.clone(),
                is_public: entry.is_public,
            });
        }

        let favorites = resolve(&file.favorite_ids)?;
        let recently_played = resolve(&file.recently_played_ids)?;

        Self::new(file.tracks, playlists)?.with_listening_history(favorites, recently_played)
    }

    /// Load a JSON catalog from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        info!(
            "Loaded catalog from {:?}: {} tracks, {} playlists",
            path,
            catalog.tracks.len(),
            catalog.playlists.len()
        );
        Ok(catalog)
    }

    /// Built-in sample catalog
    ///
    /// Eight pop tracks and three playlists. The listener starts with the
    /// first three tracks as favorites and the first five as recently played.
    pub fn sample() -> Self {
        const COVER_A: &str = "https://images.pexels.com/photos/1105666/pexels-photo-1105666.jpeg?w=400";
        const COVER_B: &str = "https://images.pexels.com/photos/1047442/pexels-photo-1047442.jpeg?w=400";
        const COVER_C: &str = "https://images.pexels.com/photos/1631677/pexels-photo-1631677.jpeg?w=400";
        const COVER_D: &str = "https://images.pexels.com/photos/1190297/pexels-photo-1190297.jpeg?w=400";
        const COVER_E: &str = "https://images.pexels.com/photos/1540406/pexels-photo-1540406.jpeg?w=400";
        const AUDIO: &str = "https://www.soundjay.com/misc/sounds/bell-ringing-05.wav";

        let track = |id: &str, title: &str, artist: &str, album: &str, secs: u32, cover: &str| {
            Track::new(id, title, artist, album, secs)
                .with_cover(cover)
                .with_audio(AUDIO)
                .with_genre("Pop")
        };

        let tracks = vec![
            track("1", "Blinding Lights", "The Weeknd", "After Hours", 201, COVER_A),
            track("2", "Watermelon Sugar", "Harry Styles", "Fine Line", 174, COVER_B),
            track("3", "Levitating", "Dua Lipa", "Future Nostalgia", 203, COVER_C),
            track("4", "Good 4 U", "Olivia Rodrigo", "SOUR", 178, COVER_D),
            track("5", "Stay", "The Kid LAROI, Justin Bieber", "Stay", 141, COVER_E),
            track("6", "As It Was", "Harry Styles", "Harry's House", 167, COVER_E),
            track("7", "Anti-Hero", "Taylor Swift", "Midnights", 201, COVER_A),
            track("8", "Flowers", "Miley Cyrus", "Endless Summer Vacation", 200, COVER_C),
        ];

        let owner = UserId::new("user");
        let playlist = |id: &str,
                        name: &str,
                        description: &str,
                        cover: &str,
                        range: Range<usize>,
                        is_public: bool| Playlist {
            id: PlaylistId::new(id),
            name: name.to_string(),
            description: description.to_string(),
            cover_url: cover.to_string(),
            tracks: tracks[range].to_vec(),
            created_by: owner.clone(),
            is_public,
        };

        let playlists = vec![
            playlist("1", "Liked Songs", "Your favorite tracks", COVER_A, 0..5, false),
            playlist("2", "Chill Vibes", "Perfect for relaxing", COVER_B, 2..7, true),
            playlist(
                "3",
                "Pop Hits 2023",
                "The biggest pop songs of the year",
                COVER_D,
                0..8,
                true,
            ),
        ];

        let favorites = tracks[0..3].to_vec();
        let recently_played = tracks[0..5].to_vec();

        Self {
            tracks,
            playlists,
            favorites,
            recently_played,
        }
    }

    /// Check ids are unique, durations positive and referenced tracks known
    pub fn validate(&self) -> Result<()> {
        let mut track_ids = HashSet::with_capacity(self.tracks.len());
        for track in &self.tracks {
            track.validate()?;
            if !track_ids.insert(&track.id) {
                return Err(CoreError::duplicate(format!("track id {}", track.id)));
            }
        }

        let mut playlist_ids = HashSet::with_capacity(self.playlists.len());
        for playlist in &self.playlists {
            if !playlist_ids.insert(&playlist.id) {
                return Err(CoreError::duplicate(format!("playlist id {}", playlist.id)));
            }
            if let Some(unknown) = playlist.tracks.iter().find(|t| !track_ids.contains(&t.id)) {
                return Err(CoreError::TrackNotFound(unknown.id.clone()));
            }
        }

        if let Some(unknown) = self
            .favorites
            .iter()
            .chain(&self.recently_played)
            .find(|t| !track_ids.contains(&t.id))
        {
            return Err(CoreError::TrackNotFound(unknown.id.clone()));
        }

        Ok(())
    }
}

impl CatalogProvider for StaticCatalog {
    fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    fn favorites(&self) -> &[Track] {
        &self.favorites
    }

    fn recently_played(&self) -> &[Track] {
        &self.recently_played
    }
}
