//! Compile-time tunables and the runtime configuration built from them.

use embassy_time::Duration;

use crate::daylight::DaylightConfig;
use crate::output::OutputConfig;
use crate::sequencer::SequencerTimings;

/// The pin where the LED strip is connected.
pub const LED_PIN: u8 = 12;

/// The number of pixels attached to the strip.
///
/// The pattern generators group pixels in pairs and the three-shift
/// generator walks a five-entry shift table, so this must stay 10.
pub const PIXEL_COUNT: usize = 10;

/// The number of spheres, two pixels each.
pub const SPHERE_COUNT: usize = PIXEL_COUNT / 2;

/// How long to keep one scene before blending to the next.
pub const KEEP_SCENE: Duration = Duration::from_secs(60);

/// Blend progress per frame.
///
/// The blend time is `FRAME_DURATION / BLEND_SPEED`, 10 seconds by default.
pub const BLEND_SPEED: f32 = 0.002;

/// Frame period of the render loop in milliseconds.
pub const FRAME_DURATION_MS: u64 = 20;

/// Frame period of the render loop.
pub const FRAME_DURATION: Duration = Duration::from_millis(FRAME_DURATION_MS);

/// Duration of one blend between two scenes.
pub const BLEND_DURATION: Duration = blend_duration(BLEND_SPEED, FRAME_DURATION_MS);

/// The pin where the analog light sensor is connected.
pub const LIGHT_SENSOR_PIN: u8 = 4;

/// Sensor reading from which the surroundings are too bright for the
/// decoration and day mode starts.
///
/// [`LIGHT_THRESHOLD_DISABLED`] turns day mode off. With a sensor attached
/// a value around 80 is a good start, but it depends on the sensor.
pub const LIGHT_THRESHOLD: u16 = LIGHT_THRESHOLD_DISABLED;

/// Threshold value that disables day mode.
pub const LIGHT_THRESHOLD_DISABLED: u16 = 0xffff;

/// Number of consecutive sensor samples that must agree before switching
/// between day and night mode.
pub const LIGHT_SWITCH_DELAY: u8 = 3;

/// Interval between two light sensor samples.
pub const SENSOR_INTERVAL: Duration = Duration::from_secs(1);

/// Convert a per-frame blend speed into a blend duration
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub const fn blend_duration(speed: f32, frame_ms: u64) -> Duration {
    if speed <= 0.0 {
        return Duration::from_millis(0);
    }
    Duration::from_millis((frame_ms as f32 / speed + 0.5) as u64)
}

/// Runtime configuration of the decoration
#[derive(Debug, Clone, Copy)]
pub struct SpheresConfig {
    /// How long each scene is held
    pub keep_scene: Duration,
    /// How long a blend between two scenes takes
    pub blend_duration: Duration,
    /// Frame period of the render loop
    pub frame_duration: Duration,
    /// Interval between light sensor samples
    pub sensor_interval: Duration,
    /// Day/night detection
    pub daylight: DaylightConfig,
    /// Strip output
    pub output: OutputConfig,
}

impl Default for SpheresConfig {
    fn default() -> Self {
        Self {
            keep_scene: KEEP_SCENE,
            blend_duration: BLEND_DURATION,
            frame_duration: FRAME_DURATION,
            sensor_interval: SENSOR_INTERVAL,
            daylight: DaylightConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl SpheresConfig {
    /// Timings for the scene sequencer
    pub const fn sequencer_timings(&self) -> SequencerTimings {
        SequencerTimings {
            keep_scene: self.keep_scene,
            blend: self.blend_duration,
        }
    }
}
