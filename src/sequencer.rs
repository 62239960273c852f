//! Scene sequencing
//!
//! Holds the current scene for a while, then blends toward the next
//! playlist entry. When the blend completes the entry becomes the current
//! scene and a new hold period starts.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::{BLEND_DURATION, KEEP_SCENE};
use crate::math::progress;
use crate::output::PixelSink;
use crate::playlist::{BlendStyle, Playlist, PlaylistEntry};
use crate::scene::Scene;

/// Timings of the sequencer
#[derive(Debug, Clone, Copy)]
pub struct SequencerTimings {
    /// How long each scene is held
    pub keep_scene: Duration,
    /// How long the blend to the next scene takes
    pub blend: Duration,
}

impl Default for SequencerTimings {
    fn default() -> Self {
        Self {
            keep_scene: KEEP_SCENE,
            blend: BLEND_DURATION,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Showing the current scene since the given time
    Hold { since: Instant },
    /// Blending toward the target since the given time
    Blend {
        target: PlaylistEntry,
        started: Instant,
    },
}

/// Scene sequencer
///
/// N is the playlist capacity
#[derive(Debug, Clone)]
pub struct Sequencer<const N: usize> {
    playlist: Playlist<N>,
    timings: SequencerTimings,
    current: Scene,
    phase: Phase,
    suspended: bool,
}

impl<const N: usize> Sequencer<N> {
    /// Create a new sequencer showing `initial`, holding from `now`
    pub fn new(
        initial: Scene,
        playlist: Playlist<N>,
        timings: SequencerTimings,
        now: Instant,
    ) -> Self {
        Self {
            playlist,
            timings,
            current: initial,
            phase: Phase::Hold { since: now },
            suspended: false,
        }
    }

    /// Create a sequencer that starts with the first playlist entry
    ///
    /// An empty playlist starts with a black scene.
    pub fn from_playlist(
        mut playlist: Playlist<N>,
        timings: SequencerTimings,
        now: Instant,
    ) -> Self {
        let initial = playlist
            .advance()
            .map(|entry| entry.scene)
            .unwrap_or_default();
        Self::new(initial, playlist, timings, now)
    }

    /// Get the scene currently held, or blended from
    pub const fn current(&self) -> &Scene {
        &self.current
    }

    /// Get the scene being blended to, if a blend is running
    pub fn target(&self) -> Option<&PlaylistEntry> {
        match &self.phase {
            Phase::Blend { target, .. } => Some(target),
            Phase::Hold { .. } => None,
        }
    }

    /// Check if a blend is in progress
    pub const fn is_blending(&self) -> bool {
        matches!(self.phase, Phase::Blend { .. })
    }

    /// Check if rendering is suspended
    pub const fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub const fn playlist(&self) -> &Playlist<N> {
        &self.playlist
    }

    /// Stop rendering
    ///
    /// A running blend completes instantly.
    pub fn suspend(&mut self) {
        if let Phase::Blend { target, started } = self.phase {
            self.current = target.scene;
            self.phase = Phase::Hold { since: started };
        }
        self.suspended = true;
    }

    /// Continue rendering, holding the current scene from `now`
    pub fn resume(&mut self, now: Instant) {
        self.suspended = false;
        self.phase = Phase::Hold { since: now };
    }

    /// Advance the sequence and render one frame
    ///
    /// Call this once per frame. Nothing is written while suspended.
    pub fn tick<S: PixelSink>(&mut self, now: Instant, sink: &mut S) {
        if self.suspended {
            return;
        }

        self.advance(now);

        match self.phase {
            Phase::Hold { .. } => self.current.write_to_pixels(sink),
            Phase::Blend { target, started } => {
                let elapsed = now.saturating_duration_since(started);
                let factor = progress(elapsed, self.timings.blend);
                match target.blend {
                    BlendStyle::Crossfade => {
                        self.current
                            .write_blended_to_pixels(sink, &target.scene, factor);
                    }
                    BlendStyle::Flash => {
                        self.current
                            .write_flash_blended_to_pixels(sink, &target.scene, factor);
                    }
                }
            }
        }
    }

    /// Update the phase for the given time
    fn advance(&mut self, now: Instant) {
        match self.phase {
            Phase::Hold { since } => {
                if now.saturating_duration_since(since) < self.timings.keep_scene {
                    return;
                }
                self.phase = match self.playlist.advance() {
                    Some(target) => {
                        #[cfg(feature = "esp32-log")]
                        println!(
                            "[Sequencer.advance] blending to next scene ({:?})",
                            target.blend
                        );
                        Phase::Blend {
                            target,
                            started: now,
                        }
                    }
                    None => Phase::Hold { since: now },
                };
                // A zero blend duration completes in the same frame
                self.finish_blend(now);
            }
            Phase::Blend { .. } => self.finish_blend(now),
        }
    }

    /// Promote the target to the current scene once the blend is complete
    fn finish_blend(&mut self, now: Instant) {
        let Phase::Blend { target, started } = self.phase else {
            return;
        };
        if now.saturating_duration_since(started) < self.timings.blend {
            return;
        }

        #[cfg(feature = "esp32-log")]
        println!("[Sequencer.finish_blend] blend complete");
        self.current = target.scene;
        self.phase = Phase::Hold { since: now };
    }
}
