//! Catalog file loading tests

use cadence_core::{CatalogProvider, CoreError, PlaylistId, StaticCatalog, TrackId};
use std::io::Write;

const CATALOG_JSON: &str = r#"{
    "tracks": [
        { "id": "1", "title": "Blinding Lights", "artist": "The Weeknd", "album": "After Hours", "duration": 201, "genre": "Pop" },
        { "id": "2", "title": "Watermelon Sugar", "artist": "Harry Styles", "album": "Fine Line", "duration": 174, "genre": "Pop" },
        { "id": "3", "title": "Levitating", "artist": "Dua Lipa", "album": "Future Nostalgia", "duration": 203, "genre": "Pop" }
    ],
    "playlists": [
        {
            "id": "road-trip",
            "name": "Road Trip",
            "description": "Long drives",
            "coverUrl": "road.jpg",
            "trackIds": ["3", "1"],
            "createdBy": "alice",
            "isPublic": true
        }
    ]
}"#;

#[test]
fn load_catalog_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG_JSON.as_bytes()).unwrap();

    let catalog = StaticCatalog::load(file.path()).unwrap();

    assert_eq!(catalog.tracks().len(), 3);
    let road_trip = catalog.playlist(&PlaylistId::new("road-trip")).unwrap();
    assert_eq!(road_trip.cover_url, "road.jpg");
    assert!(road_trip.is_public);
    assert_eq!(road_trip.created_by.as_str(), "alice");
    assert_eq!(road_trip.position_of(&TrackId::new("1")), Some(1));
    assert_eq!(road_trip.total_duration_secs(), 404);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = StaticCatalog::load(dir.path().join("missing.json"));
    assert!(matches!(result, Err(CoreError::Io(_))));
}

#[test]
fn zero_duration_track_in_file_is_rejected() {
    let json = r#"{ "tracks": [ { "id": "1", "title": "Silence", "artist": "-", "album": "-", "duration": 0 } ] }"#;
    assert!(matches!(
        StaticCatalog::from_json_str(json),
        Err(CoreError::InvalidInput(_))
    ));
}

#[test]
fn listening_history_must_name_known_tracks() {
    let json = r#"{
        "tracks": [ { "id": "1", "title": "One", "artist": "-", "album": "-", "duration": 60 } ],
        "favoriteIds": ["1"],
        "recentlyPlayedIds": ["1", "9"]
    }"#;
    assert!(matches!(
        StaticCatalog::from_json_str(json),
        Err(CoreError::TrackNotFound(id)) if id == TrackId::new("9")
    ));
}
