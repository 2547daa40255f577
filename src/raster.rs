//! Segment rasterizer
//!
//! Draws a segment's four-point gradient onto a frame buffer. Transparency
//! is a pass-through weight for whatever is already in the buffer: `0.0`
//! paints the segment color, `1.0` leaves the pixel alone.

use embassy_time::Instant;

use crate::color::{Palette, Rgb, composite, lerp_colors};
use crate::segment::{CONTROL_POINTS, Segment, dim};

/// Fill the frame with the background color
pub fn clear(frame: &mut [Rgb]) {
    frame.fill(Rgb { r: 0, g: 0, b: 0 });
}

/// Composite one segment onto the frame.
///
/// Pixels outside the frame or the segment's move range are skipped.
/// The segment itself is never modified.
pub fn render_segment<P: Palette + ?Sized>(
    segment: &Segment,
    palette: &P,
    now: Instant,
    frame: &mut [Rgb],
) {
    let Some(last_pixel) = frame.len().checked_sub(1) else {
        return;
    };
    let last_pixel = i32::try_from(last_pixel).unwrap_or(i32::MAX);

    let points = segment.control_points();
    let dimming = dim(segment, now);

    let first = points[0].min(points[CONTROL_POINTS - 1]);
    let last = points[0].max(points[CONTROL_POINTS - 1]);

    let start = first.max(0).max(segment.range.min());
    let end = last.min(last_pixel).min(segment.range.max());
    if start > end {
        return;
    }

    for pixel in start..=end {
        let Some(section) = find_section(&points, pixel) else {
            continue;
        };
        let t = section_fraction(points[section], points[section + 1], pixel);

        let color = lerp_colors(
            palette.color_of(segment.colors[section]),
            palette.color_of(segment.colors[section + 1]),
            t,
        );
        let transparency = (segment.transparency[section] * (1.0 - t)
            + segment.transparency[section + 1] * t)
            * dimming;

        if transparency < 1.0 {
            let Ok(index) = usize::try_from(pixel) else {
                continue;
            };
            if let Some(led) = frame.get_mut(index) {
                *led = composite(*led, color, transparency);
            }
        }
    }
}

/// Index of the first section `[points[i], points[i + 1]]` containing `pixel`
fn find_section(points: &[i32; CONTROL_POINTS], pixel: i32) -> Option<usize> {
    points.windows(2).position(|pair| {
        let (a, b) = (pair[0], pair[1]);
        a.min(b) <= pixel && pixel <= a.max(b)
    })
}

/// Position of `pixel` between `start` and `end` as `0.0..=1.0`.
///
/// A zero-length section resolves to `0.0`.
#[allow(clippy::cast_precision_loss)]
fn section_fraction(start: i32, end: i32, pixel: i32) -> f32 {
    if start == end {
        return 0.0;
    }
    pixel.abs_diff(start) as f32 / end.abs_diff(start) as f32
}
