//! Rendering scenes to a pixel sink
//!
//! Each write routine sets every pixel once, in index order, then commits
//! the frame with a single [`PixelSink::show`].

use super::Scene;
use crate::color::{Color, Rgb, WHITE};
use crate::config::{PIXEL_COUNT, SPHERE_COUNT};
use crate::output::PixelSink;

/// Width of the stagger between spheres during a flash blend
const FLASH_SHIFT_WIDTH: f32 = 0.3;

/// Progress of the flash blend for the sphere holding pixel `index`
///
/// Later spheres start later, so the flash wipes along the strip.
#[allow(clippy::cast_precision_loss)]
fn flash_progress(index: usize, blend_factor: f32) -> f32 {
    let pair = (index / 2) as f32;
    let offset = pair / SPHERE_COUNT as f32 + pair * FLASH_SHIFT_WIDTH;
    (blend_factor / FLASH_SHIFT_WIDTH - offset).clamp(0.0, 1.0)
}

/// Blend through white: the first half fades `from` to white, the second
/// half fades white to `to`
fn flash_color(from: Color, to: Color, progress: f32) -> Color {
    if progress < 0.5 {
        from.blend_with(WHITE, progress * 2.0)
    } else {
        WHITE.blend_with(to, (progress - 0.5) * 2.0)
    }
}

fn write_frame<S: PixelSink>(sink: &mut S, frame: &[Rgb; PIXEL_COUNT]) {
    for (index, pixel) in frame.iter().enumerate() {
        sink.set_pixel(index, *pixel);
    }
    sink.show();
}

impl Scene {
    /// Pixels of the scene
    pub fn frame(&self) -> [Rgb; PIXEL_COUNT] {
        self.colors.map(Color::to_rgb)
    }

    /// Pixels of the scene blended with `next` by `blend_factor`
    ///
    /// The factor is not clamped, callers keep it in `[0.0, 1.0]`.
    pub fn blended_frame(&self, next: &Scene, blend_factor: f32) -> [Rgb; PIXEL_COUNT] {
        let mut frame = [Rgb::default(); PIXEL_COUNT];
        for (i, pixel) in frame.iter_mut().enumerate() {
            *pixel = self.colors[i]
                .blend_with(next.colors[i], blend_factor)
                .to_rgb();
        }
        frame
    }

    /// Pixels of a staggered flash-to-white blend toward `next`
    pub fn flash_blended_frame(&self, next: &Scene, blend_factor: f32) -> [Rgb; PIXEL_COUNT] {
        let mut frame = [Rgb::default(); PIXEL_COUNT];
        for (i, pixel) in frame.iter_mut().enumerate() {
            let progress = flash_progress(i, blend_factor);
            *pixel = flash_color(self.colors[i], next.colors[i], progress).to_rgb();
        }
        frame
    }

    /// Write the scene to the pixels
    pub fn write_to_pixels<S: PixelSink>(&self, sink: &mut S) {
        write_frame(sink, &self.frame());
    }

    /// Write the scene to the pixels, blended with another scene
    pub fn write_blended_to_pixels<S: PixelSink>(
        &self,
        sink: &mut S,
        next: &Scene,
        blend_factor: f32,
    ) {
        write_frame(sink, &self.blended_frame(next, blend_factor));
    }

    /// Write the scene to the pixels, flash blended with another scene
    pub fn write_flash_blended_to_pixels<S: PixelSink>(
        &self,
        sink: &mut S,
        next: &Scene,
        blend_factor: f32,
    ) {
        write_frame(sink, &self.flash_blended_frame(next, blend_factor));
    }
}
