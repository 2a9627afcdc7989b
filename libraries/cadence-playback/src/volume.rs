//! Volume control with logarithmic scaling
//!
//! Volume range is 0-100%, mapped to -60 dB to 0 dB for whichever sink the
//! display layer eventually drives.

/// Volume controller with logarithmic scaling
#[derive(Debug, Clone)]
pub struct Volume {
    /// Volume level (0-100)
    level: u8,

    /// Mute state (preserves volume level)
    muted: bool,
}

impl Volume {
    /// Create new volume controller
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
            muted: false,
        }
    }

    /// Set volume level (0-100)
    ///
    /// Changing the level always unmutes.
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
        self.muted = false;
    }

    /// Get current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Mute audio (preserves volume level)
    pub fn mute(&mut self) {
        self.muted = true;
    }

    /// Unmute audio (restores previous volume)
    pub fn unmute(&mut self) {
        self.muted = false;
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Linear gain multiplier
    ///
    /// Returns 0.0 if muted, otherwise logarithmic gain based on level
    pub fn gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            Self::calculate_linear_gain(self.level)
        }
    }

    /// Convert volume percentage to linear gain
    ///
    /// Formula: gain = 10^((level% - 100) * 0.6 / 20)
    /// - 0%   → silence
    /// - 50%  → -30 dB → 0.0316 gain
    /// - 100% →   0 dB → 1.0 gain (unity)
    fn calculate_linear_gain(level: u8) -> f32 {
        if level == 0 {
            return 0.0;
        }

        let db = (level as f32 - 100.0) * 0.6;
        10.0_f32.powf(db / 20.0)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(75)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_clamped() {
        let mut volume = Volume::new(150);
        assert_eq!(volume.level(), 100);

        volume.set_level(200);
        assert_eq!(volume.level(), 100);
    }

    #[test]
    fn unity_and_silence() {
        assert!((Volume::new(100).gain() - 1.0).abs() < 1e-6);
        assert_eq!(Volume::new(0).gain(), 0.0);
    }

    #[test]
    fn half_volume_is_minus_30_db() {
        let volume = Volume::new(50);
        assert!((20.0 * volume.gain().log10() + 30.0).abs() < 0.01);
    }

    #[test]
    fn mute_preserves_level() {
        let mut volume = Volume::new(60);
        volume.mute();
        assert!(volume.is_muted());
        assert_eq!(volume.gain(), 0.0);
        assert_eq!(volume.level(), 60);

        volume.toggle_mute();
        assert!(!volume.is_muted());
        assert!(volume.gain() > 0.0);
    }

    #[test]
    fn set_level_unmutes() {
        let mut volume = Volume::new(60);
        volume.mute();
        volume.set_level(30);
        assert!(!volume.is_muted());
    }
}
