//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::SpheresConfig;
use crate::daylight::{DaylightDetector, LightMode, LightSensor};
use crate::output::PixelSink;
use crate::scene::Scene;
use crate::sequencer::Sequencer;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Samples the light sensor and switches between day and night mode
/// - Advances the sequencer, which writes to the output
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(sequencer, output, sensor, &config);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis() as u64);
/// }
/// ```
pub struct FrameScheduler<S: PixelSink, L: LightSensor, const N: usize> {
    output: S,
    sensor: L,
    sequencer: Sequencer<N>,
    daylight: DaylightDetector,
    next_frame: Instant,
    next_sample: Instant,
    frame_duration: Duration,
    sensor_interval: Duration,
}

impl<S: PixelSink, L: LightSensor, const N: usize> FrameScheduler<S, L, N> {
    /// Create a new frame scheduler.
    ///
    /// The first tick renders immediately and samples the sensor.
    pub fn new(sequencer: Sequencer<N>, output: S, sensor: L, config: &SpheresConfig) -> Self {
        Self {
            output,
            sensor,
            sequencer,
            daylight: DaylightDetector::new(config.daylight),
            next_frame: Instant::from_millis(0),
            next_sample: Instant::from_millis(0),
            frame_duration: config.frame_duration,
            sensor_interval: config.sensor_interval,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Samples the light sensor when due
    /// 3. Renders the current frame to the output
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        if now >= self.next_sample {
            self.next_sample = now + self.sensor_interval;
            if let Some(mode) = self.daylight.sample(&mut self.sensor) {
                self.switch_mode(mode, now);
            }
        }

        self.sequencer.tick(now, &mut self.output);

        // Calculate next frame deadline
        self.next_frame += self.frame_duration;

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    fn switch_mode(&mut self, mode: LightMode, now: Instant) {
        #[cfg(feature = "esp32-log")]
        println!("[FrameScheduler.switch_mode] entering {:?} mode", mode);
        match mode {
            LightMode::Day => {
                self.sequencer.suspend();
                Scene::new().write_to_pixels(&mut self.output);
            }
            LightMode::Night => self.sequencer.resume(now),
        }
    }

    /// Get the current day/night mode.
    pub const fn mode(&self) -> LightMode {
        self.daylight.mode()
    }

    /// Get a reference to the sequencer.
    pub const fn sequencer(&self) -> &Sequencer<N> {
        &self.sequencer
    }

    /// Get a mutable reference to the sequencer.
    pub fn sequencer_mut(&mut self) -> &mut Sequencer<N> {
        &mut self.sequencer
    }

    /// Get a reference to the output.
    pub const fn output(&self) -> &S {
        &self.output
    }

    /// Get a mutable reference to the sensor.
    pub fn sensor_mut(&mut self) -> &mut L {
        &mut self.sensor
    }
}
