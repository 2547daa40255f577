//! Per-frame position update with wrap and reflect boundaries

use libm::{fmodf, floorf};

use super::{Direction, Segment};
use crate::bounds::MoveRange;

/// Advance a segment by `dt` seconds.
///
/// Only `position`, `speed` and `direction` are touched. A zero or
/// non-finite `dt` leaves the segment where it is (apart from folding a
/// position that was already outside its range).
pub fn advance(segment: &mut Segment, dt: f32) {
    let delta = if dt.is_finite() { segment.speed * dt } else { 0.0 };
    let position = segment.position + delta;
    if !position.is_finite() {
        return;
    }

    if segment.edge_reflect {
        reflect(segment, position);
    } else {
        segment.position = wrap(position, segment.range);
    }
}

/// Fold a position back into the range, keeping the overshoot.
///
/// Below `min` the fold measures from `max`, so `min - 1` lands on
/// `max - 1`: the seam skips one pixel. Firmware output depends on this,
/// it is not a plain modulo.
#[allow(clippy::cast_precision_loss)]
pub fn wrap(position: f32, range: MoveRange) -> f32 {
    let min = range.min() as f32;
    let max = range.max() as f32;
    let span = range.count() as f32;

    let folded = if position < min {
        max - fmodf(min - position, span)
    } else if position > max {
        min + fmodf(position - max, span)
    } else {
        return position;
    };
    // The fractional part of the last pixel can still land just outside
    folded.clamp(min, max)
}

/// Bounce the segment off the range edges.
///
/// The position moves as a triangle wave over `2 * width`, so several
/// bounces within one step are resolved in place.
#[allow(clippy::cast_precision_loss)]
fn reflect(segment: &mut Segment, position: f32) {
    let range = segment.range;
    let min = range.min() as f32;
    let max = range.max() as f32;

    if position >= min && position <= max {
        segment.position = position;
        return;
    }

    let heading = if position < min {
        Direction::Backward
    } else {
        Direction::Forward
    };

    let width = range.width();
    let (folded, unfolded_forward) = if width <= 0.0 {
        (min, false)
    } else {
        let period = 2.0 * width;
        let offset = position - min;
        let phase = offset - period * floorf(offset / period);
        if phase < width {
            (min + phase, true)
        } else {
            (min + (period - phase), false)
        }
    };

    // A descending leg of the fold reverses the travel direction
    let direction = if unfolded_forward {
        heading
    } else {
        heading.reversed()
    };
    segment.position = folded.clamp(min, max);
    segment.direction = direction;
    segment.speed = direction.apply(segment.speed.abs());
}
