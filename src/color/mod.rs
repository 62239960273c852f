mod hue;

use smart_leds::RGB8;

use crate::math::{lerp, u8_to_unit, unit_to_u8};

pub use hue::hue_to_channels;

/// Packed pixel representation written to the strip
pub type Rgb = RGB8;

/// Plain white
pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);

/// Plain black
pub const BLACK: Color = Color::from_rgb(0.0, 0.0, 0.0);

/// A color with floating point channels in `[0.0, 1.0]`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a color from red, green and blue channels
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a fully saturated, full brightness color from a hue
    ///
    /// The hue is expected in `[0.0, 1.0)`, 0.0 being red.
    pub fn from_hue(hue: f32) -> Self {
        let (r, g, b) = hue_to_channels(hue);
        Self { r, g, b }
    }

    /// Create a gray color with the given level
    pub const fn gray(level: f32) -> Self {
        Self::from_rgb(level, level, level)
    }

    /// Create a color from a packed value (0xRRGGBB format)
    pub fn from_packed(color: u32) -> Self {
        Self::from(rgb_from_u32(color))
    }

    /// Blend this color with another one
    ///
    /// # Arguments
    /// * `other` - Color to blend toward
    /// * `factor` - Blend factor (0.0 = all self, 1.0 = all other)
    #[must_use]
    pub fn blend_with(self, other: Self, factor: f32) -> Self {
        Self {
            r: lerp(self.r, other.r, factor),
            g: lerp(self.g, other.g, factor),
            b: lerp(self.b, other.b, factor),
        }
    }

    /// Get the 8-bit pixel value for the strip
    pub fn to_rgb(self) -> Rgb {
        Rgb {
            r: unit_to_u8(self.r),
            g: unit_to_u8(self.g),
            b: unit_to_u8(self.b),
        }
    }

    /// Get the packed pixel value (0xRRGGBB format)
    pub fn packed(self) -> u32 {
        let rgb = self.to_rgb();
        (u32::from(rgb.r) << 16) | (u32::from(rgb.g) << 8) | u32::from(rgb.b)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self {
            r: u8_to_unit(rgb.r),
            g: u8_to_unit(rgb.g),
            b: u8_to_unit(rgb.b),
        }
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        color.to_rgb()
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
