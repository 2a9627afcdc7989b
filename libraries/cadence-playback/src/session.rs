//! Shared controller with a background progress ticker
//!
//! The controller is held behind an async mutex so that user operations and
//! ticks never interleave. A ticker task runs only while a track is playing
//! and is bound to the progress epoch it was spawned for; a tick from an
//! older epoch is refused by the controller and retires its task.

use crate::controller::PlaybackController;
use crate::types::{PlaybackSnapshot, PlaybackStatus};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

struct Ticker {
    epoch: u64,
    handle: JoinHandle<()>,
}

/// Playback controller plus its progress ticker
///
/// Must be used from within a Tokio runtime.
pub struct PlaybackSession {
    controller: Arc<Mutex<PlaybackController>>,
    tick_interval: Duration,
    ticker: Option<Ticker>,
}

impl PlaybackSession {
    pub fn new(controller: PlaybackController, tick_interval: Duration) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
            tick_interval,
            ticker: None,
        }
    }

    /// Run one operation against the controller
    ///
    /// The ticker is started, restarted or stopped afterwards to match the
    /// resulting playback status.
    pub async fn apply<R>(&mut self, op: impl FnOnce(&mut PlaybackController) -> R) -> R {
        let (result, playing_epoch) = {
            let mut controller = self.controller.lock().await;
            let result = op(&mut controller);
            let playing_epoch = (controller.status() == PlaybackStatus::Playing)
                .then(|| controller.progress_epoch());
            (result, playing_epoch)
        };

        self.reconcile(playing_epoch);
        result
    }

    /// Read from the controller without mutating it
    pub async fn read<R>(&self, op: impl FnOnce(&PlaybackController) -> R) -> R {
        let controller = self.controller.lock().await;
        op(&controller)
    }

    /// Current state for display
    pub async fn snapshot(&self) -> PlaybackSnapshot {
        self.read(PlaybackController::snapshot).await
    }

    /// Whether a ticker task is alive
    pub fn is_ticking(&self) -> bool {
        self.ticker
            .as_ref()
            .is_some_and(|ticker| !ticker.handle.is_finished())
    }

    /// Stop the ticker
    ///
    /// Controller state is kept; the next playing operation starts a new one.
    pub fn shutdown(&mut self) {
        self.stop_ticker();
    }

    fn reconcile(&mut self, playing_epoch: Option<u64>) {
        let running_epoch = self
            .ticker
            .as_ref()
            .filter(|ticker| !ticker.handle.is_finished())
            .map(|ticker| ticker.epoch);

        match playing_epoch {
            Some(epoch) if running_epoch == Some(epoch) => {}
            Some(epoch) => {
                self.stop_ticker();
                self.ticker = Some(self.spawn_ticker(epoch));
            }
            None => self.stop_ticker(),
        }
    }

    fn spawn_ticker(&self, epoch: u64) -> Ticker {
        let controller = Arc::clone(&self.controller);
        let period = self.tick_interval;

        debug!("Starting progress ticker (epoch {}, every {:?})", epoch, period);

        let handle = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);

            loop {
                interval.tick().await;
                if !controller.lock().await.tick_progress(epoch) {
                    debug!("Progress ticker for epoch {} retired", epoch);
                    break;
                }
            }
        });

        Ticker { epoch, handle }
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.handle.abort();
        }
    }
}

impl Drop for PlaybackSession {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}
