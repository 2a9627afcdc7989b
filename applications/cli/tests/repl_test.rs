//! End-to-end tests for the command loop
//!
//! Commands are fed from an in-memory buffer and the printed replies are
//! checked along with the resulting controller state.

use cadence_cli::repl;
use cadence_core::{PlaylistId, StaticCatalog, TrackId, UserId};
use cadence_playback::{PlaybackConfig, PlaybackController, PlaybackSession, PlaybackStatus};
use std::io::Write;
use std::time::Duration;

fn create_session() -> PlaybackSession {
    let controller = PlaybackController::new(
        PlaybackConfig::default(),
        &StaticCatalog::sample(),
        UserId::new("listener"),
    );
    PlaybackSession::new(controller, Duration::from_secs(1))
}

async fn run_script(session: &mut PlaybackSession, script: &str) -> String {
    let mut output = Vec::new();
    repl::run(session, script.as_bytes(), &mut output)
        .await
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[tokio::test(start_paused = true)]
async fn playlist_session() {
    let mut session = create_session();
    let output = run_script(
        &mut session,
        "playlist 2\nnext\nenqueue 1\nnext\npause\nstatus\n",
    )
    .await;

    assert!(output.contains("Playing: [3] Levitating"));
    assert!(output.contains("Playing: [4] Good 4 U"));
    assert!(output.contains("Queued 1 (1 in queue)"));
    assert!(output.contains("Playing: [1] Blinding Lights"));
    assert!(output.contains("Paused: [1] Blinding Lights"));
    assert!(output.contains("Context: playlist 2 at #1"));

    let snapshot = session.snapshot().await;
    assert_eq!(snapshot.status, PlaybackStatus::Paused);
    assert!(snapshot.queue.is_empty());
    let recent: Vec<&str> = snapshot
        .recently_played
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(recent, vec!["1", "4", "3", "2", "5"]);
}

#[tokio::test(start_paused = true)]
async fn errors_do_not_stop_the_loop() {
    let mut session = create_session();
    let output = run_script(&mut session, "resume\ndance\nplay 99\nplay 2\n").await;

    assert!(output.contains("error: No track loaded"));
    assert!(output.contains("error: Invalid command: unknown command 'dance'"));
    assert!(output.contains("error: Track not found: 99"));
    assert!(output.contains("Playing: [2] Watermelon Sugar"));
}

#[tokio::test(start_paused = true)]
async fn quit_stops_reading() {
    let mut session = create_session();
    let output = run_script(&mut session, "play 1\nquit\nplay 2\n").await;

    assert!(output.contains("[1] Blinding Lights"));
    assert!(!output.contains("[2] Watermelon Sugar"));
    session.shutdown();
}

#[tokio::test(start_paused = true)]
async fn library_commands() {
    let mut session = create_session();
    let output = run_script(
        &mut session,
        concat!(
            "new Road Trip | Long drives\nplay 5\nfav\nfav 7\nfav 7\n",
            "unfav 1\nunfav 8\nvolume 30\nmute\n",
        ),
    )
    .await;

    assert!(output.contains("Created playlist Road Trip"));
    assert!(output.contains("Added current track to favorites"));
    assert!(output.contains("Added 7 to favorites"));
    assert!(output.contains("7 is already a favorite"));
    assert!(output.contains("Removed 1 from favorites"));
    assert!(output.contains("8 is not a favorite"));
    assert!(output.contains("Volume 30%"));
    assert!(output.contains("Muted"));

    let (playlist, favorites, volume, muted) = session
        .read(|c| {
            let playlist = c
                .playlists()
                .iter()
                .find(|p| p.name == "Road Trip")
                .cloned();
            let favorites: Vec<TrackId> = c.favorites().iter().map(|t| t.id.clone()).collect();
            (playlist, favorites, c.volume(), c.is_muted())
        })
        .await;

    let playlist = playlist.unwrap();
    assert_eq!(playlist.description, "Long drives");
    assert_eq!(playlist.created_by, UserId::new("listener"));
    let expected: Vec<TrackId> = ["2", "3", "5", "7"].into_iter().map(TrackId::new).collect();
    assert_eq!(favorites, expected);
    assert_eq!(volume, 30);
    assert!(muted);

    let add = format!("add {} 3\n", playlist.id);
    let output = run_script(&mut session, &add).await;
    assert!(output.contains(&format!("Added 3 to playlist {}", playlist.id)));

    let length = session
        .read(|c| c.playlist(&playlist.id).map(|p| p.len()))
        .await;
    assert_eq!(length, Some(1));
}

#[tokio::test(start_paused = true)]
async fn shuffle_fills_queue_from_context() {
    let mut session = create_session();
    let output = run_script(&mut session, "shuffle\nplaylist 3 0\nshuffle\n").await;

    assert!(output.contains("error: No playlist context"));
    assert!(output.contains("Shuffle on, 7 tracks queued"));

    let snapshot = session.snapshot().await;
    assert!(snapshot.shuffled);
    assert_eq!(snapshot.current_playlist, Some(PlaylistId::new("3")));
    assert!(snapshot
        .queue
        .iter()
        .all(|t| t.id != TrackId::new("1")));
}

#[tokio::test(start_paused = true)]
async fn catalog_file_drives_the_session() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{
            "tracks": [
                {{ "id": "a", "title": "Alpha", "artist": "X", "album": "Y", "duration": 60 }},
                {{ "id": "b", "title": "Beta", "artist": "X", "album": "Y", "duration": 90 }}
            ],
            "playlists": []
        }}"#
    )
    .unwrap();

    let catalog = StaticCatalog::load(file.path()).unwrap();
    let controller =
        PlaybackController::new(PlaybackConfig::default(), &catalog, UserId::new("user"));
    let mut session = PlaybackSession::new(controller, Duration::from_secs(1));

    let output = run_script(&mut session, "tracks\nplay b\nnext\n").await;
    assert!(output.contains("[a] Alpha - X (Y) 1:00"));
    assert!(output.contains("Playing: [a] Alpha"));
}
