//! Geometry utilities for grid layout and rasterization

use crate::types::{Point, Size};

/// Number of quarter ticks drawn per section, both edges included
pub const TICKS_PER_SECTION: usize = 5;

/// Horizontal offset of tick `k` from the section's left edge.
///
/// Integer division truncates, so for widths not divisible by 4 the
/// interior ticks land on `k * section_width / 4` rounded toward zero.
pub fn tick_offset(section_width: u32, k: u32) -> i64 {
    (k as i64 * section_width as i64) / 4
}

/// All tick offsets of a section, left to right
pub fn tick_offsets(section_width: u32) -> [i64; TICKS_PER_SECTION] {
    [0, 1, 2, 3, 4].map(|k| tick_offset(section_width, k))
}

/// Top and bottom y of measure band `measure`
pub fn band_bounds(measure: u32, height: u32) -> (i64, i64) {
    let top = measure as i64 * height as i64;
    (top, top + height as i64)
}

/// Canvas size for a grid: `(width, height * measures / 2)`.
///
/// Returns `None` when the height does not fit in `u32`.
pub fn canvas_size(width: u32, height: u32, measures: u32) -> Option<Size> {
    let canvas_height = (height as u64 * measures as u64) / 2;
    u32::try_from(canvas_height)
        .ok()
        .map(|h| Size::new(width, h))
}

/// Visit every pixel covered by the segment `start..=end`.
///
/// Bresenham stepping with a square brush of `stroke_width` pixels centred
/// on each step. Both endpoints are included. Coordinates are not clipped.
pub fn for_each_line_pixel<F>(start: Point, end: Point, stroke_width: u32, mut plot: F)
where
    F: FnMut(i64, i64),
{
    let brush = stroke_width.max(1) as i64;
    let lo = -(brush - 1) / 2;
    let hi = lo + brush - 1;

    let (mut x, mut y) = (start.x, start.y);
    let dx = (end.x - start.x).abs();
    let dy = -(end.y - start.y).abs();
    let sx = if start.x < end.x { 1 } else { -1 };
    let sy = if start.y < end.y { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        for oy in lo..=hi {
            for ox in lo..=hi {
                plot(x + ox, y + oy);
            }
        }
        if x == end.x && y == end.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
