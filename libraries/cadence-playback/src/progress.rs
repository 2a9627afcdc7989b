//! Simulated playback clock
//!
//! There is no audio engine behind the controller, so progress through a
//! track is advanced by timer ticks. Each playing stint gets an epoch; a tick
//! stamped with an older epoch belongs to a timer that should already have
//! been cancelled and is ignored.

/// Progress through the current track, in percent
#[derive(Debug, Clone, Default)]
pub struct ProgressClock {
    percent: f64,
    epoch: u64,
}

impl ProgressClock {
    /// Create a clock at 0% and epoch 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Current progress (0-100)
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Current epoch
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Invalidate outstanding ticks without moving the clock
    pub fn bump_epoch(&mut self) -> u64 {
        self.epoch = self.epoch.wrapping_add(1);
        self.epoch
    }

    /// Rewind to 0% for a new track
    pub fn restart(&mut self) -> u64 {
        self.percent = 0.0;
        self.bump_epoch()
    }

    /// Advance by one tick of a track lasting `duration_secs`
    ///
    /// Wraps to 0 once the end is reached.
    pub fn advance(&mut self, duration_secs: u32) {
        if duration_secs == 0 {
            return;
        }
        let next = self.percent + 100.0 / f64::from(duration_secs);
        self.percent = if next >= 100.0 { 0.0 } else { next };
    }

    /// Jump to `percent`, clamped to 0-100
    pub fn seek(&mut self, percent: f64) {
        self.percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 100.0)
        };
    }

    /// Whole seconds elapsed in a track lasting `duration_secs`
    pub fn elapsed_secs(&self, duration_secs: u32) -> u32 {
        ((self.percent / 100.0) * f64::from(duration_secs)).floor() as u32
    }
}

/// Format seconds as `m:ss`
pub fn format_time(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_by_duration_fraction() {
        let mut clock = ProgressClock::new();
        clock.advance(200);
        clock.advance(200);
        assert!((clock.percent() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn wraps_to_zero_at_end() {
        let mut clock = ProgressClock::new();
        clock.advance(2);
        assert!((clock.percent() - 50.0).abs() < 1e-9);
        clock.advance(2);
        assert_eq!(clock.percent(), 0.0);
    }

    #[test]
    fn restart_resets_and_bumps_epoch() {
        let mut clock = ProgressClock::new();
        clock.advance(10);
        let epoch = clock.restart();
        assert_eq!(clock.percent(), 0.0);
        assert_eq!(epoch, 1);
        assert_eq!(clock.epoch(), 1);
    }

    #[test]
    fn seek_is_clamped() {
        let mut clock = ProgressClock::new();
        clock.seek(150.0);
        assert_eq!(clock.percent(), 100.0);
        clock.seek(-5.0);
        assert_eq!(clock.percent(), 0.0);
        clock.seek(f64::NAN);
        assert_eq!(clock.percent(), 0.0);
    }

    #[test]
    fn elapsed_seconds_floor() {
        let mut clock = ProgressClock::new();
        clock.seek(50.0);
        assert_eq!(clock.elapsed_secs(201), 100);
    }

    #[test]
    fn time_formatting() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(201), "3:21");
        assert_eq!(format_time(3600), "60:00");
    }
}
