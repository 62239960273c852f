//! Pattern generators
//!
//! Pixels are grouped in pairs (`index / 2`), one pair per sphere. All hues
//! and levels are wrapped into `[0.0, 1.0)` with [`normalize`].

use super::Scene;
use crate::color::Color;
use crate::config::PIXEL_COUNT;
use crate::math::normalize;

#[allow(clippy::cast_precision_loss)]
const fn pair_factor(index: usize) -> f32 {
    (index / 2) as f32
}

const fn is_odd(index: usize) -> bool {
    index & 1 != 0
}

impl Scene {
    /// Scene with one single color
    pub fn single_color(color: Color) -> Self {
        Self {
            colors: [color; PIXEL_COUNT],
        }
    }

    /// Scene with a base color, each following sphere shifted by `hue_shift`
    pub fn base_with_shift(base_hue: f32, hue_shift: f32) -> Self {
        let mut scene = Self::new();
        for i in 0..PIXEL_COUNT {
            let hue = normalize(base_hue + hue_shift * pair_factor(i));
            scene.set_color(i, Color::from_hue(hue));
        }
        scene
    }

    /// Scene with a base color, spheres shifted by alternating steps
    ///
    /// The outer steps use `hue_shift1`, the inner ones `hue_shift2`.
    pub fn base_with_two_shifts(base_hue: f32, hue_shift1: f32, hue_shift2: f32) -> Self {
        let shifts = [hue_shift1, hue_shift2, hue_shift2, hue_shift2, hue_shift1];
        let mut scene = Self::new();
        let mut hue = normalize(base_hue);
        for i in 0..PIXEL_COUNT {
            scene.set_color(i, Color::from_hue(hue));
            if is_odd(i) {
                hue = normalize(hue + shifts[i / 2]);
            }
        }
        scene
    }

    /// Zebra pattern, alternating two colors pixel by pixel
    pub fn zebra(hue: f32, hue_shift: f32) -> Self {
        let even = Color::from_hue(hue);
        let odd = Color::from_hue(normalize(hue + hue_shift));
        let mut scene = Self::new();
        for i in 0..PIXEL_COUNT {
            scene.set_color(i, if is_odd(i) { odd } else { even });
        }
        scene
    }

    /// Two color pattern
    ///
    /// Sphere `n` uses the shifted color if bit `n` of `bit_mask` is set.
    pub fn two_colors(hue: f32, hue_shift: f32, bit_mask: u8) -> Self {
        let base = Color::from_hue(hue);
        let shifted = Color::from_hue(normalize(hue + hue_shift));
        let mut scene = Self::new();
        for i in 0..PIXEL_COUNT {
            let selected = (1u16 << (i / 2)) & u16::from(bit_mask) != 0;
            scene.set_color(i, if selected { shifted } else { base });
        }
        scene
    }

    /// White scene, the level of each following sphere raised by `shift`
    pub fn white(level: f32, shift: f32) -> Self {
        let mut scene = Self::new();
        let mut level = level;
        for i in 0..PIXEL_COUNT {
            scene.set_color(i, Color::gray(level));
            if is_odd(i) {
                level = normalize(level + shift);
            }
        }
        scene
    }
}
