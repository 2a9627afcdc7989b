//! Plain-text rendering of playback state

use cadence_core::{Playlist, Track};
use cadence_playback::{format_time, PlaybackSnapshot, PlaybackStatus};
use std::fmt::Write;

/// One-line description of a track
pub fn track_line(track: &Track) -> String {
    format!(
        "[{}] {} - {} ({}) {}",
        track.id,
        track.title,
        track.artist,
        track.album,
        format_time(track.duration_secs)
    )
}

/// Numbered track listing
pub fn track_list(tracks: &[&Track]) -> String {
    if tracks.is_empty() {
        return "  (empty)".to_string();
    }

    tracks
        .iter()
        .enumerate()
        .map(|(i, track)| format!("  {:>2}. {}", i, track_line(track)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn playlist_list(playlists: &[Playlist]) -> String {
    if playlists.is_empty() {
        return "  (no playlists)".to_string();
    }

    playlists
        .iter()
        .map(|p| {
            format!(
                "  [{}] {} - {} tracks, {}{}",
                p.id,
                p.name,
                p.len(),
                format_time(p.total_duration_secs().min(u32::MAX as u64) as u32),
                if p.is_public { "" } else { " (private)" }
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Status panel: now playing, progress, context, queue and settings
pub fn status(snapshot: &PlaybackSnapshot) -> String {
    let mut out = String::new();

    match (&snapshot.current_track, snapshot.status) {
        (Some(track), status) => {
            let label = if status == PlaybackStatus::Playing {
                "Playing"
            } else {
                "Paused"
            };
            let _ = writeln!(out, "{}: {}", label, track_line(track));
            let _ = writeln!(
                out,
                "  {} / {}  [{:.1}%]",
                format_time(snapshot.elapsed_secs),
                format_time(track.duration_secs),
                snapshot.progress_percent
            );
        }
        (None, _) => {
            let _ = writeln!(out, "Nothing playing");
        }
    }

    match (&snapshot.current_playlist, snapshot.current_track_index) {
        (Some(id), Some(index)) => {
            let _ = writeln!(out, "Context: playlist {} at #{}", id, index);
        }
        _ => {
            let _ = writeln!(out, "Context: catalog");
        }
    }

    let _ = writeln!(
        out,
        "Volume: {}%{} | Shuffle: {} | Favorites: {}",
        snapshot.volume,
        if snapshot.muted { " (muted)" } else { "" },
        if snapshot.shuffled { "on" } else { "off" },
        snapshot.favorites.len()
    );

    let _ = writeln!(out, "Queue:");
    let queue: Vec<&Track> = snapshot.queue.iter().collect();
    let _ = writeln!(out, "{}", track_list(&queue));

    let _ = writeln!(out, "Recently played:");
    let recent: Vec<&Track> = snapshot.recently_played.iter().collect();
    let _ = write!(out, "{}", track_list(&recent));

    out
}

pub fn help() -> &'static str {
    "Commands:
  tracks                      list catalog tracks
  playlists                   list playlists
  play <track-id>             play a catalog track
  playlist <id> [start]       play a playlist from an index
  context <id>|none           set or clear the playlist context
  pause | resume | toggle     transport
  next | prev                 skip forward or back
  shuffle                     toggle shuffle of the playlist context
  enqueue <track-id>          add a track to the queue
  dequeue <index>             remove a queued track
  clear-queue                 empty the queue
  fav [track-id]              favorite a track (current track if omitted)
  unfav <track-id>            remove a favorite
  new <name> [| description]  create a playlist
  add <playlist-id> <track-id> append a track to a playlist
  volume <0-100>              set volume
  mute                        toggle mute
  seek <percent>              jump within the current track
  status                      show playback state
  help                        show this help
  quit                        exit"
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::{StaticCatalog, TrackId, UserId};
    use cadence_playback::{PlaybackConfig, PlaybackController};

    #[test]
    fn track_line_includes_duration() {
        let track = Track::new("1", "Blinding Lights", "The Weeknd", "After Hours", 201);
        assert_eq!(
            track_line(&track),
            "[1] Blinding Lights - The Weeknd (After Hours) 3:21"
        );
    }

    #[test]
    fn status_of_idle_controller() {
        let controller = PlaybackController::new(
            PlaybackConfig::default(),
            &StaticCatalog::sample(),
            UserId::new("user"),
        );
        let text = status(&controller.snapshot());
        assert!(text.starts_with("Nothing playing"));
        assert!(text.contains("Context: catalog"));
        assert!(text.contains("Volume: 75%"));
    }

    #[test]
    fn status_of_playing_controller() {
        let mut controller = PlaybackController::new(
            PlaybackConfig::default(),
            &StaticCatalog::sample(),
            UserId::new("user"),
        );
        controller.play_track(&TrackId::new("3")).unwrap();
        controller.mute();

        let text = status(&controller.snapshot());
        assert!(text.starts_with("Playing: [3] Levitating"));
        assert!(text.contains("0:00 / 3:23"));
        assert!(text.contains("(muted)"));
    }
}
