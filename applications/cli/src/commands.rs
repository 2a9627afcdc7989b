//! Line commands and their execution against a playback session

use crate::error::{CliError, Result};
use crate::render;
use cadence_core::{PlaylistId, Track, TrackId};
use cadence_playback::{PlaybackController, PlaybackError, PlaybackSession};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Tracks,
    Playlists,
    Play(TrackId),
    Playlist { id: PlaylistId, start: usize },
    Context(Option<PlaylistId>),
    Pause,
    Resume,
    Toggle,
    Next,
    Prev,
    Shuffle,
    Enqueue(TrackId),
    Dequeue(usize),
    ClearQueue,
    Favorite(Option<TrackId>),
    Unfavorite(TrackId),
    NewPlaylist { name: String, description: String },
    AddToPlaylist { playlist: PlaylistId, track: TrackId },
    Volume(u8),
    Mute,
    Seek(f64),
    Status,
    Help,
    Quit,
}

/// Result of executing one command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Text to show; keep reading commands
    Continue(String),
    Quit,
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "tracks" => Command::Tracks,
            "playlists" => Command::Playlists,
            "play" => Command::Play(TrackId::new(required(rest, "play <track-id>")?)),
            "playlist" => {
                let mut parts = rest.split_whitespace();
                let id = parts
                    .next()
                    .ok_or_else(|| CliError::command("usage: playlist <id> [start]"))?;
                let start = match parts.next() {
                    Some(start) => parse_number(start, "start index")?,
                    None => 0,
                };
                Command::Playlist {
                    id: PlaylistId::new(id),
                    start,
                }
            }
            "context" => match required(rest, "context <id>|none")? {
                "none" => Command::Context(None),
                id => Command::Context(Some(PlaylistId::new(id))),
            },
            "pause" => Command::Pause,
            "resume" => Command::Resume,
            "toggle" => Command::Toggle,
            "next" => Command::Next,
            "prev" | "previous" => Command::Prev,
            "shuffle" => Command::Shuffle,
            "enqueue" => Command::Enqueue(TrackId::new(required(rest, "enqueue <track-id>")?)),
            "dequeue" => Command::Dequeue(parse_number(
                required(rest, "dequeue <index>")?,
                "queue index",
            )?),
            "clear-queue" => Command::ClearQueue,
            "fav" => Command::Favorite((!rest.is_empty()).then(|| TrackId::new(rest))),
            "unfav" => Command::Unfavorite(TrackId::new(required(rest, "unfav <track-id>")?)),
            "new" => {
                let (name, description) = match rest.split_once('|') {
                    Some((name, description)) => (name.trim(), description.trim()),
                    None => (rest, ""),
                };
                Command::NewPlaylist {
                    name: required(name, "new <name> [| description]")?.to_string(),
                    description: description.to_string(),
                }
            }
            "add" => {
                let mut parts = rest.split_whitespace();
                match (parts.next(), parts.next()) {
                    (Some(playlist), Some(track)) => Command::AddToPlaylist {
                        playlist: PlaylistId::new(playlist),
                        track: TrackId::new(track),
                    },
                    _ => return Err(CliError::command("usage: add <playlist-id> <track-id>")),
                }
            }
            "volume" => {
                let level: u8 = parse_number(required(rest, "volume <0-100>")?, "volume")?;
                if level > 100 {
                    return Err(CliError::command("volume must be 0-100"));
                }
                Command::Volume(level)
            }
            "mute" => Command::Mute,
            "seek" => {
                let percent: f64 = parse_number(required(rest, "seek <percent>")?, "percent")?;
                if !percent.is_finite() {
                    return Err(CliError::command("percent must be a number"));
                }
                Command::Seek(percent)
            }
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "" => return Err(CliError::command("empty command")),
            other => {
                return Err(CliError::command(format!(
                    "unknown command '{}' (try 'help')",
                    other
                )))
            }
        };

        Ok(command)
    }
}

fn required<'a>(value: &'a str, usage: &str) -> Result<&'a str> {
    if value.is_empty() {
        Err(CliError::command(format!("usage: {}", usage)))
    } else {
        Ok(value)
    }
}

fn parse_number<T: FromStr>(value: &str, what: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::command(format!("invalid {}: '{}'", what, value)))
}

fn catalog_track(controller: &PlaybackController, id: &TrackId) -> Result<Track> {
    controller
        .catalog()
        .iter()
        .find(|t| &t.id == id)
        .cloned()
        .ok_or_else(|| PlaybackError::TrackNotFound(id.clone()).into())
}

/// Run one command against the session
pub async fn execute(session: &mut PlaybackSession, command: Command) -> Result<Outcome> {
    let message = match command {
        Command::Tracks => {
            session
                .read(|c| {
                    let tracks: Vec<&Track> = c.catalog().iter().collect();
                    render::track_list(&tracks)
                })
                .await
        }
        Command::Playlists => session.read(|c| render::playlist_list(c.playlists())).await,
        Command::Play(id) => {
            session.apply(|c| c.play_track(&id)).await?;
            now_playing(session).await
        }
        Command::Playlist { id, start } => {
            session.apply(|c| c.play_playlist(&id, start)).await?;
            now_playing(session).await
        }
        Command::Context(id) => {
            session
                .apply(|c| c.set_current_playlist(id.as_ref()))
                .await?;
            match id {
                Some(id) => format!("Context set to playlist {}", id),
                None => "Context cleared".to_string(),
            }
        }
        Command::Pause => {
            session.apply(|c| c.pause()).await;
            "Paused".to_string()
        }
        Command::Resume => {
            session.apply(|c| c.resume()).await?;
            now_playing(session).await
        }
        Command::Toggle => {
            session.apply(|c| c.toggle_play()).await?;
            now_playing(session).await
        }
        Command::Next => {
            session.apply(|c| c.next()).await?;
            now_playing(session).await
        }
        Command::Prev => {
            session.apply(|c| c.previous()).await?;
            now_playing(session).await
        }
        Command::Shuffle => {
            let enabled = session.apply(|c| c.toggle_shuffle()).await?;
            if enabled {
                let queued = session.read(|c| c.queue_len()).await;
                format!("Shuffle on, {} tracks queued", queued)
            } else {
                "Shuffle off".to_string()
            }
        }
        Command::Enqueue(id) => {
            let length = session
                .apply(|c| c.enqueue_track(&id).map(|()| c.queue_len()))
                .await?;
            format!("Queued {} ({} in queue)", id, length)
        }
        Command::Dequeue(index) => {
            let track = session.apply(|c| c.remove_from_queue(index)).await?;
            format!("Removed {}", render::track_line(&track))
        }
        Command::ClearQueue => {
            session.apply(|c| c.clear_queue()).await;
            "Queue cleared".to_string()
        }
        Command::Favorite(None) => {
            let is_favorite = session.apply(|c| c.toggle_favorite_current()).await?;
            if is_favorite {
                "Added current track to favorites".to_string()
            } else {
                "Removed current track from favorites".to_string()
            }
        }
        Command::Favorite(Some(id)) => {
            let added = session
                .apply(|c| catalog_track(c, &id).map(|track| c.add_to_favorites(track)))
                .await?;
            if added {
                format!("Added {} to favorites", id)
            } else {
                format!("{} is already a favorite", id)
            }
        }
        Command::Unfavorite(id) => {
            if session.apply(|c| c.remove_from_favorites(&id)).await {
                format!("Removed {} from favorites", id)
            } else {
                format!("{} is not a favorite", id)
            }
        }
        Command::NewPlaylist { name, description } => {
            let id = session
                .apply(|c| c.create_playlist(&name, &description))
                .await?;
            format!("Created playlist {} ({})", name.trim(), id)
        }
        Command::AddToPlaylist { playlist, track } => {
            session
                .apply(|c| -> Result<()> {
                    let track = catalog_track(c, &track)?;
                    c.add_to_playlist(&playlist, track)?;
                    Ok(())
                })
                .await?;
            format!("Added {} to playlist {}", track, playlist)
        }
        Command::Volume(level) => {
            session.apply(|c| c.set_volume(level)).await;
            format!("Volume {}%", level)
        }
        Command::Mute => {
            let muted = session
                .apply(|c| {
                    c.toggle_mute();
                    c.is_muted()
                })
                .await;
            let label = if muted { "Muted" } else { "Unmuted" };
            label.to_string()
        }
        Command::Seek(percent) => {
            session.apply(|c| c.seek_to_percent(percent)).await?;
            now_playing(session).await
        }
        Command::Status => render::status(&session.snapshot().await),
        Command::Help => render::help().to_string(),
        Command::Quit => return Ok(Outcome::Quit),
    };

    Ok(Outcome::Continue(message))
}

async fn now_playing(session: &PlaybackSession) -> String {
    session
        .read(|c| match c.current_track() {
            Some(track) => format!("{:?}: {}", c.status(), render::track_line(track)),
            None => "Nothing playing".to_string(),
        })
        .await
}
