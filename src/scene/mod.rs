//! Color scenes
//!
//! A scene is a complete color assignment for every pixel of the strip.
//! Scenes are built by the pattern generators, then only read when
//! rendered or blended toward another scene.

mod patterns;
mod render;

use crate::color::Color;
use crate::config::PIXEL_COUNT;

/// Colors for every pixel of the strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    colors: [Color; PIXEL_COUNT],
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create a new empty (black) scene
    pub const fn new() -> Self {
        Self {
            colors: [crate::color::BLACK; PIXEL_COUNT],
        }
    }

    /// Set a single color in the scene
    ///
    /// Indices outside the strip are ignored.
    pub fn set_color(&mut self, index: usize, color: Color) {
        if let Some(slot) = self.colors.get_mut(index) {
            *slot = color;
        }
    }

    /// Get the color at the given index
    pub fn color(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Get all colors of the scene
    pub const fn colors(&self) -> &[Color; PIXEL_COUNT] {
        &self.colors
    }
}
