//! Pixel output
//!
//! [`PixelSink`] is what scenes render into. [`StripOutput`] implements it
//! on top of any `smart-leds` driver.

#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::{SmartLedsWrite, brightness, gamma};

use crate::color::Rgb;
use crate::config::PIXEL_COUNT;

/// Receiver of rendered pixels
///
/// Implement this trait to support different hardware platforms.
pub trait PixelSink {
    /// Set the pixel at `index`
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Commit all pixels set since the last call to the LEDs
    fn show(&mut self);
}

/// Configuration for the strip output
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// Global brightness (0-255)
    pub brightness: u8,
    /// Apply gamma correction before writing
    pub gamma: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            brightness: 255,
            gamma: false,
        }
    }
}

/// Frame buffer in front of a `smart-leds` driver
pub struct StripOutput<W> {
    writer: W,
    config: OutputConfig,
    frame: [Rgb; PIXEL_COUNT],
    failed_writes: u32,
}

impl<W> StripOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    /// Create a new strip output
    pub fn new(writer: W, config: OutputConfig) -> Self {
        Self {
            writer,
            config,
            frame: [Rgb::default(); PIXEL_COUNT],
            failed_writes: 0,
        }
    }

    /// Set the global brightness
    pub fn set_brightness(&mut self, brightness: u8) {
        self.config.brightness = brightness;
    }

    /// Pixels that will be written on the next [`PixelSink::show`]
    pub const fn frame(&self) -> &[Rgb; PIXEL_COUNT] {
        &self.frame
    }

    /// Number of driver writes that failed
    pub const fn failed_writes(&self) -> u32 {
        self.failed_writes
    }

    /// Get a reference to the driver
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Get a mutable reference to the driver
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }
}

impl<W> PixelSink for StripOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.frame.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) {
        let pixels = self.frame.iter().copied();
        let level = self.config.brightness;
        let result = if self.config.gamma {
            self.writer.write(brightness(gamma(pixels), level))
        } else {
            self.writer.write(brightness(pixels, level))
        };

        if result.is_err() {
            self.failed_writes = self.failed_writes.wrapping_add(1);
            #[cfg(feature = "esp32-log")]
            println!(
                "[StripOutput.show] strip write failed ({} so far)",
                self.failed_writes
            );
        }
    }
}
