/// Convert a hue in `[0.0, 1.0)` into red, green and blue channels
///
/// Saturation and value are both full. The hue circle is split into six
/// sectors starting at red, each ramping one channel up or down.
#[allow(clippy::cast_possible_truncation)]
pub fn hue_to_channels(hue: f32) -> (f32, f32, f32) {
    let scaled = hue * 6.0;
    let sector = libm::floorf(scaled);
    let rise = scaled - sector;
    let fall = 1.0 - rise;

    match (sector as i32).rem_euclid(6) {
        0 => (1.0, rise, 0.0),
        1 => (fall, 1.0, 0.0),
        2 => (0.0, 1.0, rise),
        3 => (0.0, fall, 1.0),
        4 => (rise, 0.0, 1.0),
        _ => (1.0, 0.0, fall),
    }
}
