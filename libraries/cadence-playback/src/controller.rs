//! Playback controller - core orchestration
//!
//! Coordinates the override queue, playlist context, catalog traversal,
//! history, favorites, volume and the simulated progress clock.

use crate::{
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    favorites::Favorites,
    history::RecentlyPlayed,
    library::PlaylistLibrary,
    progress::ProgressClock,
    queue::PlayQueue,
    shuffle::shuffled_without,
    types::{PlaybackConfig, PlaybackSnapshot, PlaybackStatus},
    volume::Volume,
};
use cadence_core::{CatalogProvider, Playlist, PlaylistId, Track, TrackId, UserId};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, warn};

/// Traversal direction through a playlist or the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Step `index` within `len`, wrapping at both ends
    fn step(self, index: usize, len: usize) -> usize {
        let index = index.min(len - 1);
        match self {
            Direction::Forward => (index + 1) % len,
            Direction::Backward if index == 0 => len - 1,
            Direction::Backward => index - 1,
        }
    }
}

/// Central playback state
///
/// Owns everything a display layer shows about playback:
/// - Current track and play/pause flag
/// - Playlist context and index (traversal order)
/// - Override queue (consumed by `next` only)
/// - Recently played history and favorites
/// - Playlist collection
/// - Volume and simulated progress
///
/// All mutation happens through `&mut self`; callers that share the
/// controller serialize access (see `PlaybackSession`).
pub struct PlaybackController {
    // State
    current_track: Option<Track>,
    is_playing: bool,

    // Traversal
    current_playlist: Option<Playlist>,
    current_track_index: usize,
    queue: PlayQueue,
    catalog: Vec<Track>,

    // Library
    recently_played: RecentlyPlayed,
    favorites: Favorites,
    library: PlaylistLibrary,
    user: UserId,
    playlist_cover_url: String,

    // Settings
    volume: Volume,
    shuffled: bool,
    progress: ProgressClock,

    rng: Box<dyn RngCore + Send>,

    // Event queue for display synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackController {
    /// Create a controller over `catalog`, acting on behalf of `user`
    ///
    /// Favorites and recently played start from the catalog's listening
    /// history.
    pub fn new(config: PlaybackConfig, catalog: &dyn CatalogProvider, user: UserId) -> Self {
        Self::with_rng(config, catalog, user, StdRng::from_entropy())
    }

    /// Create a controller with a caller-supplied random source
    pub fn with_rng(
        config: PlaybackConfig,
        catalog: &dyn CatalogProvider,
        user: UserId,
        rng: impl RngCore + Send + 'static,
    ) -> Self {
        let mut favorites = Favorites::new();
        for track in catalog.favorites() {
            favorites.add(track.clone());
        }

        Self {
            current_track: None,
            is_playing: false,
            current_playlist: None,
            current_track_index: 0,
            queue: PlayQueue::new(),
            catalog: catalog.tracks().to_vec(),
            recently_played: RecentlyPlayed::seeded(catalog.recently_played()),
            favorites,
            library: PlaylistLibrary::new(catalog.playlists().to_vec()),
            user,
            playlist_cover_url: config.playlist_cover_url,
            volume: Volume::new(config.volume),
            shuffled: false,
            progress: ProgressClock::new(),
            rng: Box::new(rng),
            pending_events: Vec::new(),
        }
    }

    // ===== Transport =====

    /// Start playing `track`
    ///
    /// If the playlist context holds the track, the index moves to its first
    /// position. A track outside the context clears the context so the index
    /// never describes a different track.
    pub fn play(&mut self, track: Track) {
        let position = self
            .current_playlist
            .as_ref()
            .map(|playlist| playlist.position_of(&track.id));

        match position {
            Some(Some(index)) => self.current_track_index = index,
            Some(None) => {
                debug!("Track {} is outside the playlist context, clearing it", track.id);
                self.set_context(None, 0);
            }
            None => {}
        }

        self.start_track(track);
    }

    /// Start playing a catalog track by ID
    pub fn play_track(&mut self, id: &TrackId) -> Result<()> {
        let track = self.catalog_track(id)?.clone();
        self.play(track);
        Ok(())
    }

    /// Pause playback
    pub fn pause(&mut self) {
        if self.is_playing {
            self.is_playing = false;
            self.progress.bump_epoch();
            debug!("Paused");
            self.emit_state_changed();
        }
    }

    /// Resume a paused track
    pub fn resume(&mut self) -> Result<()> {
        if self.current_track.is_none() {
            return Err(PlaybackError::NoTrackLoaded);
        }

        if !self.is_playing {
            self.is_playing = true;
            self.progress.bump_epoch();
            debug!("Resumed");
            self.emit_state_changed();
        }
        Ok(())
    }

    /// Flip between playing and paused
    pub fn toggle_play(&mut self) -> Result<()> {
        if self.is_playing {
            self.pause();
            Ok(())
        } else {
            self.resume()
        }
    }

    /// Skip to next track
    ///
    /// Priority: queue head, then the playlist context, then catalog order.
    pub fn next(&mut self) -> Result<()> {
        if let Some(track) = self.queue.pop_next() {
            // The queue overrides traversal without replacing the context
            if let Some(index) = self
                .current_playlist
                .as_ref()
                .and_then(|playlist| playlist.position_of(&track.id))
            {
                self.current_track_index = index;
            }
            self.emit_queue_changed();
            self.start_track(track);
            return Ok(());
        }

        self.step(Direction::Forward)
    }

    /// Go to previous track
    ///
    /// Never consults the queue.
    pub fn previous(&mut self) -> Result<()> {
        self.step(Direction::Backward)
    }

    /// Move through the playlist context, or the catalog without one
    fn step(&mut self, direction: Direction) -> Result<()> {
        if let Some(track) = self.step_context(direction) {
            self.start_track(track);
            return Ok(());
        }

        let track = self.step_catalog(direction)?;
        self.start_track(track);
        Ok(())
    }

    fn step_context(&mut self, direction: Direction) -> Option<Track> {
        let playlist = self.current_playlist.as_ref().filter(|p| !p.is_empty())?;
        let index = direction.step(self.current_track_index, playlist.len());
        let track = playlist.track_at(index)?.clone();
        self.current_track_index = index;
        Some(track)
    }

    fn step_catalog(&self, direction: Direction) -> Result<Track> {
        let current = self
            .current_track
            .as_ref()
            .ok_or(PlaybackError::NothingToPlay)?;
        if self.catalog.is_empty() {
            return Err(PlaybackError::NothingToPlay);
        }

        let position = self
            .catalog
            .iter()
            .position(|t| t.id == current.id)
            .ok_or_else(|| PlaybackError::TrackNotFound(current.id.clone()))?;
        let index = direction.step(position, self.catalog.len());

        self.catalog
            .get(index)
            .cloned()
            .ok_or(PlaybackError::NothingToPlay)
    }

    /// Internal: make `track` current and start it
    fn start_track(&mut self, track: Track) {
        let previous_track_id = self.current_track.as_ref().map(|t| t.id.clone());
        let was_playing = self.status() == PlaybackStatus::Playing;

        debug!("Starting {} - {} ({})", track.artist, track.title, track.id);

        self.recently_played.record(track.clone());
        self.pending_events.push(PlaybackEvent::TrackChanged {
            track_id: track.id.clone(),
            previous_track_id,
        });

        self.current_track = Some(track);
        self.is_playing = true;
        self.progress.restart();

        if !was_playing {
            self.emit_state_changed();
        }
    }

    // ===== Queue Management =====

    /// Replace the queue with the playlist context in random order
    ///
    /// The current track is left out. Returns the new queue length.
    pub fn shuffle_queue(&mut self) -> Result<usize> {
        let playlist = self
            .current_playlist
            .as_ref()
            .ok_or(PlaybackError::NoPlaylistContext)?;
        if playlist.is_empty() {
            return Err(PlaybackError::EmptyPlaylist(playlist.id.clone()));
        }

        let exclude = self.current_track.as_ref().map(|t| &t.id);
        let shuffled = shuffled_without(&playlist.tracks, exclude, &mut *self.rng);
        let length = shuffled.len();

        self.queue.replace(shuffled);
        debug!("Shuffled {} tracks into the queue", length);
        self.emit_queue_changed();
        Ok(length)
    }

    /// Flip the shuffle flag
    ///
    /// Turning shuffle on refills the queue; turning it off keeps the queue.
    /// Returns the new flag.
    pub fn toggle_shuffle(&mut self) -> Result<bool> {
        if self.shuffled {
            self.shuffled = false;
            return Ok(false);
        }

        self.shuffle_queue()?;
        self.shuffled = true;
        Ok(true)
    }

    /// Add track to end of queue
    pub fn add_to_queue(&mut self, track: Track) {
        self.queue.push(track);
        self.emit_queue_changed();
    }

    /// Add a catalog track to end of queue by ID
    pub fn enqueue_track(&mut self, id: &TrackId) -> Result<()> {
        let track = self.catalog_track(id)?.clone();
        self.add_to_queue(track);
        Ok(())
    }

    /// Remove track from queue by index
    pub fn remove_from_queue(&mut self, index: usize) -> Result<Track> {
        let len = self.queue.len();
        let track = self
            .queue
            .remove(index)
            .ok_or(PlaybackError::IndexOutOfBounds { index, len })?;
        self.emit_queue_changed();
        Ok(track)
    }

    /// Clear entire queue
    pub fn clear_queue(&mut self) {
        if !self.queue.is_empty() {
            self.queue.clear();
            self.emit_queue_changed();
        }
    }

    // ===== Favorites =====

    /// Mark a track as favorite
    ///
    /// Returns false if it already was one.
    pub fn add_to_favorites(&mut self, track: Track) -> bool {
        let track_id = track.id.clone();
        let added = self.favorites.add(track);
        if added {
            self.emit_favorites_changed(track_id, true);
        }
        added
    }

    /// Unmark a track
    ///
    /// Returns false if it was not a favorite.
    pub fn remove_from_favorites(&mut self, id: &TrackId) -> bool {
        let removed = self.favorites.remove(id);
        if removed {
            self.emit_favorites_changed(id.clone(), false);
        }
        removed
    }

    /// Flip favorite status of the current track
    pub fn toggle_favorite_current(&mut self) -> Result<bool> {
        let track = self
            .current_track
            .clone()
            .ok_or(PlaybackError::NoTrackLoaded)?;
        let track_id = track.id.clone();
        let is_favorite = self.favorites.toggle(track);
        self.emit_favorites_changed(track_id, is_favorite);
        Ok(is_favorite)
    }

    /// Check whether a track is a favorite
    pub fn is_favorite(&self, id: &TrackId) -> bool {
        self.favorites.contains(id)
    }

    // ===== Playlists =====

    /// Create an empty private playlist owned by the acting user
    pub fn create_playlist(&mut self, name: &str, description: &str) -> Result<PlaylistId> {
        let id = self.library.create(
            name,
            description,
            self.user.clone(),
            &self.playlist_cover_url,
        )?;
        self.pending_events.push(PlaybackEvent::PlaylistCreated {
            playlist_id: id.clone(),
        });
        Ok(id)
    }

    /// Append a track to a playlist
    ///
    /// Appending to the playlist that provides the current context extends
    /// the traversal as well.
    pub fn add_to_playlist(&mut self, id: &PlaylistId, track: Track) -> Result<()> {
        let length = self.library.add_track(id, track.clone()).map_err(|e| {
            warn!("Cannot add {} to playlist {}: {}", track.id, id, e);
            e
        })?;

        if let Some(context) = self.current_playlist.as_mut().filter(|p| &p.id == id) {
            context.push(track);
        }

        self.pending_events.push(PlaybackEvent::PlaylistUpdated {
            playlist_id: id.clone(),
            length,
        });
        Ok(())
    }

    /// Make a playlist the context and start it at `start_index`
    ///
    /// Unknown playlists, empty playlists and out-of-range indexes are
    /// rejected without touching the current state.
    pub fn play_playlist(&mut self, id: &PlaylistId, start_index: usize) -> Result<()> {
        let playlist = self.library.require(id)?;
        if playlist.is_empty() {
            return Err(PlaybackError::EmptyPlaylist(id.clone()));
        }

        let track = match playlist.track_at(start_index) {
            Some(track) => track.clone(),
            None => {
                warn!(
                    "Start index {} out of range for playlist {} ({} tracks)",
                    start_index,
                    id,
                    playlist.len()
                );
                return Err(PlaybackError::IndexOutOfBounds {
                    index: start_index,
                    len: playlist.len(),
                });
            }
        };

        let playlist = playlist.clone();
        self.set_context(Some(playlist), start_index);
        self.start_track(track);
        Ok(())
    }

    /// Set or clear the playlist context without starting playback
    ///
    /// The index points at the current track when the playlist holds it,
    /// otherwise at the first track.
    pub fn set_current_playlist(&mut self, id: Option<&PlaylistId>) -> Result<()> {
        let Some(id) = id else {
            self.set_context(None, 0);
            return Ok(());
        };

        let playlist = self.library.require(id)?.clone();
        let index = self
            .current_track
            .as_ref()
            .and_then(|t| playlist.position_of(&t.id))
            .unwrap_or(0);
        self.set_context(Some(playlist), index);
        Ok(())
    }

    fn set_context(&mut self, playlist: Option<Playlist>, index: usize) {
        let playlist_id = playlist.as_ref().map(|p| p.id.clone());
        self.current_playlist = playlist;
        self.current_track_index = index;
        self.pending_events
            .push(PlaybackEvent::ContextChanged { playlist_id });
    }

    // ===== Volume =====

    /// Set volume (0-100), unmuting
    pub fn set_volume(&mut self, level: u8) {
        self.volume.set_level(level);
        self.emit_volume_changed();
    }

    /// Get current volume level (0-100)
    pub fn volume(&self) -> u8 {
        self.volume.level()
    }

    /// Mute audio
    pub fn mute(&mut self) {
        self.volume.mute();
        self.emit_volume_changed();
    }

    /// Unmute audio
    pub fn unmute(&mut self) {
        self.volume.unmute();
        self.emit_volume_changed();
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.emit_volume_changed();
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    /// Linear output gain for the current volume
    pub fn gain(&self) -> f32 {
        self.volume.gain()
    }

    // ===== Progress =====

    /// Epoch of the current playing stint
    ///
    /// Changes on every track start, pause and resume.
    pub fn progress_epoch(&self) -> u64 {
        self.progress.epoch()
    }

    /// Advance the simulated clock by one tick
    ///
    /// Returns false (and changes nothing) when the tick belongs to an older
    /// epoch or nothing is playing.
    pub fn tick_progress(&mut self, epoch: u64) -> bool {
        if epoch != self.progress.epoch() || self.status() != PlaybackStatus::Playing {
            return false;
        }
        let Some(duration_secs) = self.current_track.as_ref().map(|t| t.duration_secs) else {
            return false;
        };

        self.progress.advance(duration_secs);
        true
    }

    /// Jump to a position in the current track (percent, clamped)
    pub fn seek_to_percent(&mut self, percent: f64) -> Result<()> {
        if self.current_track.is_none() {
            return Err(PlaybackError::NoTrackLoaded);
        }
        self.progress.seek(percent);
        Ok(())
    }

    /// Progress through the current track (0-100)
    pub fn progress_percent(&self) -> f64 {
        self.progress.percent()
    }

    /// Whole seconds elapsed in the current track
    pub fn elapsed_secs(&self) -> u32 {
        self.current_track
            .as_ref()
            .map(|t| self.progress.elapsed_secs(t.duration_secs))
            .unwrap_or(0)
    }

    // ===== State Queries =====

    /// Derived playback status
    pub fn status(&self) -> PlaybackStatus {
        match (&self.current_track, self.is_playing) {
            (None, _) => PlaybackStatus::Idle,
            (Some(_), false) => PlaybackStatus::Paused,
            (Some(_), true) => PlaybackStatus::Playing,
        }
    }

    /// Get currently loaded track
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    /// Check the play flag
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Active playlist context
    pub fn current_playlist(&self) -> Option<&Playlist> {
        self.current_playlist.as_ref()
    }

    /// Index into the active playlist
    ///
    /// None without a context.
    pub fn current_track_index(&self) -> Option<usize> {
        self.current_playlist
            .as_ref()
            .map(|_| self.current_track_index)
    }

    /// Get all tracks in queue
    pub fn queue(&self) -> Vec<&Track> {
        self.queue.get_all()
    }

    /// Get queue length
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Recently played tracks, most recent first
    pub fn recently_played(&self) -> Vec<&Track> {
        self.recently_played.get_all()
    }

    /// Favorite tracks in insertion order
    pub fn favorites(&self) -> Vec<&Track> {
        self.favorites.get_all()
    }

    /// All playlists
    pub fn playlists(&self) -> &[Playlist] {
        self.library.all()
    }

    /// Look up a playlist
    pub fn playlist(&self, id: &PlaylistId) -> Option<&Playlist> {
        self.library.get(id)
    }

    /// Full catalog in catalog order
    pub fn catalog(&self) -> &[Track] {
        &self.catalog
    }

    /// Acting user
    pub fn user(&self) -> &UserId {
        &self.user
    }

    /// Check whether shuffle is enabled
    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Capture the full state for a display layer
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            status: self.status(),
            current_track: self.current_track.clone(),
            current_playlist: self.current_playlist.as_ref().map(|p| p.id.clone()),
            current_track_index: self.current_track_index(),
            queue: self.queue.get_all().into_iter().cloned().collect(),
            recently_played: self.recently_played.get_all().into_iter().cloned().collect(),
            favorites: self.favorites.get_all().into_iter().cloned().collect(),
            progress_percent: self.progress.percent(),
            elapsed_secs: self.elapsed_secs(),
            volume: self.volume.level(),
            muted: self.volume.is_muted(),
            shuffled: self.shuffled,
        }
    }

    fn catalog_track(&self, id: &TrackId) -> Result<&Track> {
        self.catalog
            .iter()
            .find(|t| &t.id == id)
            .ok_or_else(|| PlaybackError::TrackNotFound(id.clone()))
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events that have been emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit_state_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::StateChanged {
            status: self.status(),
        });
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    fn emit_favorites_changed(&mut self, track_id: TrackId, is_favorite: bool) {
        self.pending_events.push(PlaybackEvent::FavoritesChanged {
            track_id,
            is_favorite,
        });
    }

    fn emit_volume_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::StaticCatalog;

    fn create_controller() -> PlaybackController {
        PlaybackController::with_rng(
            PlaybackConfig::default(),
            &StaticCatalog::sample(),
            UserId::new("user"),
            StdRng::seed_from_u64(1),
        )
    }

    fn id(value: &str) -> TrackId {
        TrackId::new(value)
    }

    #[test]
    fn create_playback_controller() {
        let controller = create_controller();
        assert_eq!(controller.status(), PlaybackStatus::Idle);
        assert_eq!(controller.volume(), 75);
        assert!(controller.queue().is_empty());
        assert_eq!(controller.catalog().len(), 8);
        assert_eq!(controller.playlists().len(), 3);
        assert_eq!(controller.current_track_index(), None);
    }

    #[test]
    fn starts_with_catalog_listening_history() {
        let controller = create_controller();
        let favorites: Vec<&str> = controller.favorites().iter().map(|t| t.id.as_str()).collect();
        let recent: Vec<&str> = controller
            .recently_played()
            .iter()
            .map(|t| t.id.as_str())
            .collect();

        assert_eq!(favorites, vec!["1", "2", "3"]);
        assert_eq!(recent, vec!["1", "2", "3", "4", "5"]);
        assert!(controller.is_favorite(&id("2")));
        assert!(!controller.has_pending_events());
    }

    #[test]
    fn played_track_moves_to_front_of_history() {
        let mut controller = create_controller();
        controller.play_track(&id("4")).unwrap();
        controller.play_track(&id("8")).unwrap();

        let recent: Vec<&str> = controller
            .recently_played()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(recent, vec!["8", "4", "1", "2", "3", "5"]);
    }

    #[test]
    fn direction_wraps() {
        assert_eq!(Direction::Forward.step(2, 3), 0);
        assert_eq!(Direction::Forward.step(0, 3), 1);
        assert_eq!(Direction::Backward.step(0, 3), 2);
        assert_eq!(Direction::Backward.step(2, 3), 1);
        assert_eq!(Direction::Forward.step(0, 1), 0);
        assert_eq!(Direction::Backward.step(0, 1), 0);
    }

    #[test]
    fn play_pause_resume() {
        let mut controller = create_controller();
        controller.play_track(&id("1")).unwrap();
        assert_eq!(controller.status(), PlaybackStatus::Playing);

        controller.pause();
        assert_eq!(controller.status(), PlaybackStatus::Paused);
        assert_eq!(controller.current_track().unwrap().id, id("1"));

        controller.toggle_play().unwrap();
        assert_eq!(controller.status(), PlaybackStatus::Playing);
    }

    #[test]
    fn toggle_when_idle_is_signaled() {
        let mut controller = create_controller();
        assert!(matches!(
            controller.toggle_play(),
            Err(PlaybackError::NoTrackLoaded)
        ));
        assert!(!controller.is_playing());
    }

    #[test]
    fn next_without_anything_is_signaled() {
        let mut controller = create_controller();
        assert!(matches!(controller.next(), Err(PlaybackError::NothingToPlay)));
        assert!(matches!(
            controller.previous(),
            Err(PlaybackError::NothingToPlay)
        ));
        assert_eq!(controller.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn catalog_traversal_without_context() {
        let mut controller = create_controller();
        controller.play_track(&id("8")).unwrap();

        controller.next().unwrap();
        assert_eq!(controller.current_track().unwrap().id, id("1"));

        controller.previous().unwrap();
        assert_eq!(controller.current_track().unwrap().id, id("8"));
    }

    #[test]
    fn play_unknown_track() {
        let mut controller = create_controller();
        assert!(matches!(
            controller.play_track(&id("99")),
            Err(PlaybackError::TrackNotFound(_))
        ));
    }

    #[test]
    fn volume_controls() {
        let mut controller = create_controller();
        controller.mute();
        assert!(controller.is_muted());
        assert_eq!(controller.gain(), 0.0);

        controller.set_volume(50);
        assert_eq!(controller.volume(), 50);
        assert!(!controller.is_muted());
    }

    #[test]
    fn events_drain() {
        let mut controller = create_controller();
        controller.play_track(&id("1")).unwrap();
        assert!(controller.has_pending_events());

        let events = controller.drain_events();
        assert!(events.contains(&PlaybackEvent::TrackChanged {
            track_id: id("1"),
            previous_track_id: None,
        }));
        assert!(events.contains(&PlaybackEvent::StateChanged {
            status: PlaybackStatus::Playing,
        }));
        assert!(!controller.has_pending_events());
    }

    #[test]
    fn seek_requires_track() {
        let mut controller = create_controller();
        assert!(matches!(
            controller.seek_to_percent(50.0),
            Err(PlaybackError::NoTrackLoaded)
        ));

        controller.play_track(&id("1")).unwrap();
        controller.seek_to_percent(50.0).unwrap();
        assert_eq!(controller.elapsed_secs(), 100);
    }
}
