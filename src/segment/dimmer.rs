//! Repeating fade-in / hold / fade-out opacity cycle

use embassy_time::Instant;

use super::Segment;

/// Cycle length applied when a remote command asks for a zero-length cycle
pub const FALLBACK_CYCLE_MS: u32 = 1_000;

/// One dimming cycle, all values in milliseconds from the cycle start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimmerCycle {
    pub fade_in_start: u32,
    pub fade_in_end: u32,
    pub fade_out_start: u32,
    pub fade_out_end: u32,
    /// Cycle length. Zero disables dimming.
    pub cycle: u32,
}

impl DimmerCycle {
    /// Cycle that keeps the segment at full level
    pub const DISABLED: Self = Self::from_array([0, 0, 0, 0, 0]);

    pub const fn from_array(times: [u32; 5]) -> Self {
        Self {
            fade_in_start: times[0],
            fade_in_end: times[1],
            fade_out_start: times[2],
            fade_out_end: times[3],
            cycle: times[4],
        }
    }

    pub const fn to_array(self) -> [u32; 5] {
        [
            self.fade_in_start,
            self.fade_in_end,
            self.fade_out_start,
            self.fade_out_end,
            self.cycle,
        ]
    }

    /// Build a cycle from untrusted breakpoints.
    ///
    /// Negative values become zero, the four breakpoints are put in
    /// ascending order, both ramps get at least one millisecond and a zero
    /// cycle length falls back to [`FALLBACK_CYCLE_MS`].
    pub fn sanitized(raw: [i32; 5]) -> Self {
        let [a, b, c, d, cycle] = raw.map(|v| u32::try_from(v).unwrap_or(0));
        let mut points = [a, b, c, d];
        points.sort_unstable();
        let [fade_in_start, mut fade_in_end, mut fade_out_start, mut fade_out_end] = points;

        fade_in_end = fade_in_end.max(fade_in_start.saturating_add(1));
        fade_out_start = fade_out_start.max(fade_in_end);
        fade_out_end = fade_out_end.max(fade_out_start.saturating_add(1));

        Self {
            fade_in_start,
            fade_in_end,
            fade_out_start,
            fade_out_end,
            cycle: if cycle == 0 { FALLBACK_CYCLE_MS } else { cycle },
        }
    }

    pub const fn is_enabled(&self) -> bool {
        self.cycle > 0
    }

    /// Level at a position inside the cycle.
    ///
    /// `elapsed_ms` may exceed the cycle length; it is wrapped first.
    #[allow(clippy::cast_precision_loss)]
    pub fn level(&self, elapsed_ms: u64) -> f32 {
        if !self.is_enabled() {
            return 1.0;
        }
        let t = elapsed_ms % u64::from(self.cycle);

        if t < u64::from(self.fade_in_start) {
            0.0
        } else if t < u64::from(self.fade_in_end) {
            ramp(t, self.fade_in_start, self.fade_in_end)
        } else if t < u64::from(self.fade_out_start) {
            1.0
        } else if t < u64::from(self.fade_out_end) {
            1.0 - ramp(t, self.fade_out_start, self.fade_out_end)
        } else {
            0.0
        }
    }
}

impl Default for DimmerCycle {
    fn default() -> Self {
        Self::from_array(super::DEFAULT_DIMMER)
    }
}

/// Fraction of the way from `start` to `end`.
///
/// Only called with `start <= t < end`, so `end > start` and the division
/// is safe. Equal breakpoints never reach here and act as a step.
#[allow(clippy::cast_precision_loss)]
fn ramp(t: u64, start: u32, end: u32) -> f32 {
    let span = u64::from(end) - u64::from(start);
    (t - u64::from(start)) as f32 / span as f32
}

/// Global level of a segment at `now`
pub fn dim(segment: &Segment, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(segment.start_time);
    segment.dimmer.level(elapsed.as_millis())
}
