//! Day/night detection
//!
//! The decoration only lights up in the dark. An ambient light sensor is
//! sampled periodically and every sample votes for day or night. The mode
//! switches only after enough consecutive votes disagree with it, so small
//! brightness changes do not make the decoration flicker.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::{LIGHT_SWITCH_DELAY, LIGHT_THRESHOLD, LIGHT_THRESHOLD_DISABLED};

/// Ambient light sensor
pub trait LightSensor {
    /// Read the current ambient brightness
    fn read(&mut self) -> u16;
}

/// Mode of the decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightMode {
    /// Dark surroundings, scenes are shown
    Night,
    /// Bright surroundings, the decoration is off
    Day,
}

/// Configuration for day/night detection
#[derive(Debug, Clone, Copy)]
pub struct DaylightConfig {
    /// Reading from which the surroundings count as bright
    pub threshold: u16,
    /// Consecutive disagreeing samples needed to switch
    ///
    /// Zero behaves like one: the first disagreeing sample switches.
    pub switch_delay: u8,
}

impl DaylightConfig {
    /// Check if day mode is enabled at all
    pub const fn is_enabled(&self) -> bool {
        self.threshold != LIGHT_THRESHOLD_DISABLED
    }
}

impl Default for DaylightConfig {
    fn default() -> Self {
        Self {
            threshold: LIGHT_THRESHOLD,
            switch_delay: LIGHT_SWITCH_DELAY,
        }
    }
}

/// Debounced day/night detector
#[derive(Debug, Clone)]
pub struct DaylightDetector {
    config: DaylightConfig,
    mode: LightMode,
    /// Consecutive samples disagreeing with `mode`
    pending: u8,
}

impl DaylightDetector {
    /// Create a new detector, starting in night mode
    pub const fn new(config: DaylightConfig) -> Self {
        Self {
            config,
            mode: LightMode::Night,
            pending: 0,
        }
    }

    /// Get the current mode
    pub const fn mode(&self) -> LightMode {
        self.mode
    }

    /// Feed one sensor sample
    ///
    /// Returns the new mode if this sample caused a switch.
    pub fn update(&mut self, level: u16) -> Option<LightMode> {
        let vote = if self.config.is_enabled() && level >= self.config.threshold {
            LightMode::Day
        } else {
            LightMode::Night
        };

        if vote == self.mode {
            self.pending = 0;
            return None;
        }

        self.pending = self.pending.saturating_add(1);
        if self.pending < self.config.switch_delay {
            return None;
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[DaylightDetector.update] switching to {:?} (level {})",
            vote, level
        );
        self.mode = vote;
        self.pending = 0;
        Some(vote)
    }

    /// Sample a sensor and feed the reading
    pub fn sample<L: LightSensor>(&mut self, sensor: &mut L) -> Option<LightMode> {
        let level = sensor.read();
        self.update(level)
    }
}
