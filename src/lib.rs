#![no_std]

pub mod color;
pub mod config;
pub mod daylight;
pub mod frame_scheduler;
pub mod math;
pub mod output;
pub mod playlist;
pub mod scene;
pub mod sequencer;

pub use config::{PIXEL_COUNT, SPHERE_COUNT, SpheresConfig};
pub use daylight::{DaylightConfig, DaylightDetector, LightMode, LightSensor};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use output::{OutputConfig, PixelSink, StripOutput};
pub use playlist::{BlendStyle, PRESET_COUNT, Playlist, PlaylistEntry};
pub use scene::Scene;
pub use sequencer::{Sequencer, SequencerTimings};

pub use color::{Color, Rgb};
pub use math::normalize;
pub use embassy_time::{Duration, Instant};
