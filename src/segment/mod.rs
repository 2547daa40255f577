//! Light segment: a moving four-point gradient
//!
//! A segment owns its animation parameters. Motion lives in [`motion`],
//! the opacity cycle in [`dimmer`], drawing in [`crate::raster`].

pub mod dimmer;
pub mod motion;

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use dimmer::{DimmerCycle, dim};
pub use motion::advance;

use crate::bounds::MoveRange;
use crate::color::{BLUE, ColorId, GREEN, RED, YELLOW};
use crate::error::EffectError;
use crate::preset::Preset;

/// Segment identifier, unique within an effect
pub type SegmentId = u16;

/// Number of color control points
pub const CONTROL_POINTS: usize = 4;

pub const DEFAULT_COLORS: [ColorId; CONTROL_POINTS] = [RED, BLUE, YELLOW, GREEN];
pub const DEFAULT_TRANSPARENCY: [f32; CONTROL_POINTS] = [0.0; CONTROL_POINTS];
pub const DEFAULT_LENGTHS: [u16; CONTROL_POINTS - 1] = [30, 30, 30];
pub const DEFAULT_SPEED: f32 = 20.0;
pub const DEFAULT_DIMMER: [u32; 5] = [0, 500, 4_500, 5_000, 5_000];

/// Travel direction along the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Towards higher pixel indices
    #[default]
    Forward,
    /// Towards lower pixel indices
    Backward,
}

impl Direction {
    /// Direction implied by a speed. Zero counts as forward.
    pub fn of_speed(speed: f32) -> Self {
        if speed < 0.0 {
            Self::Backward
        } else {
            Self::Forward
        }
    }

    pub const fn sign(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    /// Give a magnitude this direction's sign
    pub fn apply(self, magnitude: f32) -> f32 {
        match self {
            Self::Forward => magnitude,
            Self::Backward => -magnitude,
        }
    }
}

/// A moving gradient of four colored control points
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub(crate) id: SegmentId,
    pub(crate) colors: [ColorId; CONTROL_POINTS],
    pub(crate) transparency: [f32; CONTROL_POINTS],
    pub(crate) lengths: [u16; CONTROL_POINTS - 1],
    /// Pixels per second, sign gives the nominal travel direction
    pub(crate) speed: f32,
    pub(crate) range: MoveRange,
    pub(crate) initial_position: i32,
    /// Location of the first control point
    pub(crate) position: f32,
    pub(crate) edge_reflect: bool,
    pub(crate) dimmer: DimmerCycle,
    /// Phase origin of the dimming cycle
    pub(crate) start_time: Instant,
    pub(crate) direction: Direction,
}

impl Segment {
    /// Create a segment with default parameters
    #[allow(clippy::cast_precision_loss)]
    pub fn new(id: SegmentId, position: i32, range: MoveRange, now: Instant) -> Self {
        Self {
            id,
            colors: DEFAULT_COLORS,
            transparency: DEFAULT_TRANSPARENCY,
            lengths: DEFAULT_LENGTHS,
            speed: DEFAULT_SPEED,
            range,
            initial_position: position,
            position: position as f32,
            edge_reflect: false,
            dimmer: DimmerCycle::default(),
            start_time: now,
            direction: Direction::of_speed(DEFAULT_SPEED),
        }
    }

    /// Create a segment and apply a preset on top of the defaults
    pub fn from_preset(
        id: SegmentId,
        position: i32,
        range: MoveRange,
        now: Instant,
        preset: &Preset,
    ) -> Self {
        let mut segment = Self::new(id, position, range, now);
        segment.apply_preset(preset);
        segment
    }

    #[must_use]
    pub fn with_colors(mut self, colors: [ColorId; CONTROL_POINTS]) -> Self {
        self.colors = colors;
        self
    }

    /// Set transparency points, clamped to `0.0..=1.0`
    #[must_use]
    pub fn with_transparency(mut self, transparency: [f32; CONTROL_POINTS]) -> Self {
        self.transparency = transparency.map(clamp_unit);
        self
    }

    #[must_use]
    pub fn with_lengths(mut self, lengths: [u16; CONTROL_POINTS - 1]) -> Self {
        self.lengths = lengths;
        self
    }

    /// Set the speed; the direction follows its sign
    #[must_use]
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self.direction = Direction::of_speed(speed);
        self
    }

    #[must_use]
    pub fn with_edge_reflect(mut self, edge_reflect: bool) -> Self {
        self.edge_reflect = edge_reflect;
        self
    }

    #[must_use]
    pub fn with_dimmer(mut self, dimmer: DimmerCycle) -> Self {
        self.dimmer = dimmer;
        self
    }

    pub const fn id(&self) -> SegmentId {
        self.id
    }

    pub const fn colors(&self) -> [ColorId; CONTROL_POINTS] {
        self.colors
    }

    pub const fn transparency(&self) -> [f32; CONTROL_POINTS] {
        self.transparency
    }

    pub const fn lengths(&self) -> [u16; CONTROL_POINTS - 1] {
        self.lengths
    }

    pub const fn speed(&self) -> f32 {
        self.speed
    }

    pub const fn range(&self) -> MoveRange {
        self.range
    }

    pub const fn initial_position(&self) -> i32 {
        self.initial_position
    }

    pub const fn position(&self) -> f32 {
        self.position
    }

    pub const fn edge_reflect(&self) -> bool {
        self.edge_reflect
    }

    pub const fn dimmer(&self) -> DimmerCycle {
        self.dimmer
    }

    pub const fn start_time(&self) -> Instant {
        self.start_time
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Sum of the three section lengths
    pub fn total_length(&self) -> u32 {
        self.lengths.iter().map(|len| u32::from(*len)).sum()
    }

    /// Pixel positions of the four control points
    #[allow(clippy::cast_possible_truncation)]
    pub fn control_points(&self) -> [i32; CONTROL_POINTS] {
        let sign = self.direction.sign();
        // Truncation towards zero matches the firmware's float-to-int cast
        let mut points = [self.position as i32; CONTROL_POINTS];
        for i in 0..self.lengths.len() {
            let step = sign * i32::from(self.lengths[i]);
            points[i + 1] = points[i].saturating_add(step);
        }
        points
    }

    /// Set colors, clamping every id to `0..=max_id`
    pub fn set_colors(&mut self, colors: [i32; CONTROL_POINTS], max_id: ColorId) {
        self.colors = colors.map(|id| {
            let id = id.clamp(0, i32::from(max_id));
            ColorId::try_from(id).unwrap_or(max_id)
        });
    }

    /// Set transparency points, clamping to `0.0..=1.0`
    pub fn set_transparency(&mut self, transparency: [f32; CONTROL_POINTS]) {
        self.transparency = transparency.map(clamp_unit);
    }

    /// Set section lengths, each at least one pixel
    pub fn set_lengths(&mut self, lengths: [i32; CONTROL_POINTS - 1]) {
        self.lengths = lengths.map(|len| u16::try_from(len.max(1)).unwrap_or(u16::MAX));
    }

    /// Set the speed; the direction follows its sign.
    ///
    /// A zero speed keeps the current direction.
    pub fn set_speed(&mut self, speed: f32) -> Result<(), EffectError> {
        if !speed.is_finite() {
            return Err(EffectError::InvalidParameter("speed must be finite"));
        }
        if speed != 0.0 {
            self.direction = Direction::of_speed(speed);
        }
        self.speed = speed;
        Ok(())
    }

    /// Set the move range and pull the position inside it
    pub fn set_range(&mut self, range: MoveRange) {
        self.range = range;
        self.position = range.clamp_position(self.position);
    }

    /// Restart from a new position
    #[allow(clippy::cast_precision_loss)]
    pub fn set_position(&mut self, position: i32) {
        self.initial_position = position;
        self.position = position as f32;
    }

    pub fn set_edge_reflect(&mut self, edge_reflect: bool) {
        self.edge_reflect = edge_reflect;
    }

    /// Set the dimming cycle from untrusted breakpoints
    pub fn set_dimmer(&mut self, times: [i32; 5]) {
        self.dimmer = DimmerCycle::sanitized(times);
    }

    /// Restart the dimming cycle at `now`
    pub fn restart_cycle(&mut self, now: Instant) {
        self.start_time = now;
    }

    /// Overwrite the animation parameters with a preset bundle.
    ///
    /// Identity, range, position and cycle phase are kept.
    pub fn apply_preset(&mut self, preset: &Preset) {
        self.colors = preset.colors;
        self.transparency = preset.transparency;
        self.lengths = preset.lengths;
        self.speed = preset.speed;
        self.direction = Direction::of_speed(preset.speed);
        self.edge_reflect = preset.edge_reflect;
        self.dimmer = preset.dimmer;
        #[cfg(feature = "esp32-log")]
        println!("[Segment.apply_preset] segment {} <- {}", self.id, preset.name);
    }
}

/// Clamp to `0.0..=1.0`, mapping NaN to zero
fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
