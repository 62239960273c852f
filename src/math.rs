use embassy_time::Duration;

/// Bring a hue or level into the range `[0.0, 1.0)`
///
/// Wraps by repeatedly adding or subtracting 1.0. Values at or beyond
/// 2^24 can no longer be reduced in `f32` and must be avoided.
#[inline]
pub fn normalize(mut value: f32) -> f32 {
    while value >= 1.0 {
        value -= 1.0;
    }
    while value < 0.0 {
        value += 1.0;
    }
    value
}

/// Linear interpolation between two values
///
/// Returns exactly `a` for `t == 0.0` and exactly `b` for `t == 1.0`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Calculate progress (0.0-1.0) based on elapsed time and duration
///
/// A zero duration is complete immediately.
#[allow(clippy::cast_precision_loss)]
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.as_millis() == 0 || elapsed.as_millis() >= duration.as_millis() {
        return 1.0;
    }

    elapsed.as_millis() as f32 / duration.as_millis() as f32
}

/// Convert a unit value (0.0-1.0) into an 8-bit channel
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[inline]
pub fn unit_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

/// Convert an 8-bit channel into a unit value (0.0-1.0)
#[inline]
pub fn u8_to_unit(value: u8) -> f32 {
    f32::from(value) / 255.0
}
