/// Inclusive pixel range a segment may move and draw in.
///
/// Always ordered: `min() <= max()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRange {
    min: i32,
    max: i32,
}

impl MoveRange {
    /// Create a range, swapping the bounds if they are inverted
    pub const fn new(min: i32, max: i32) -> Self {
        if min > max {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    /// Range covering the whole strip
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn full(led_count: usize) -> Self {
        let last = if led_count == 0 { 0 } else { led_count - 1 };
        let last = if last > i32::MAX as usize {
            i32::MAX
        } else {
            last as i32
        };
        Self { min: 0, max: last }
    }

    /// Create a range from untrusted bounds.
    ///
    /// Each bound is clamped to the strip, then the pair is reordered.
    pub fn clamped(min: i32, max: i32, led_count: usize) -> Self {
        let strip = Self::full(led_count);
        Self::new(
            min.clamp(strip.min, strip.max),
            max.clamp(strip.min, strip.max),
        )
    }

    pub const fn min(self) -> i32 {
        self.min
    }

    pub const fn max(self) -> i32 {
        self.max
    }

    /// Get the number of pixels in the range
    pub const fn count(self) -> u32 {
        self.max.abs_diff(self.min) + 1
    }

    /// Distance between the bounds (zero for a single-pixel range)
    #[allow(clippy::cast_precision_loss)]
    pub fn width(self) -> f32 {
        self.max as f32 - self.min as f32
    }

    pub const fn contains(self, pixel: i32) -> bool {
        pixel >= self.min && pixel <= self.max
    }

    /// Pull a position into the range
    #[allow(clippy::cast_precision_loss)]
    pub fn clamp_position(self, position: f32) -> f32 {
        position.clamp(self.min as f32, self.max as f32)
    }
}

impl Default for MoveRange {
    fn default() -> Self {
        Self::full(crate::config::DEFAULT_LED_COUNT)
    }
}
