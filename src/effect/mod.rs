//! Effect: an ordered, fixed-capacity collection of segments
//!
//! Segments are stored inline in a `heapless::Vec`, so an effect never
//! allocates. Insertion order is draw order: later segments are composited
//! over earlier ones.

use embassy_time::Instant;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bounds::MoveRange;
use crate::color::{Palette, Rgb};
use crate::config::EffectConfig;
use crate::error::EffectError;
use crate::raster::{clear, render_segment};
use crate::segment::{Segment, SegmentId, advance};

/// Segment collection sharing a strip length and frame rate
#[derive(Debug, Clone)]
pub struct Effect<const CAPACITY: usize> {
    id: u16,
    led_count: usize,
    fps: u8,
    segments: Vec<Segment, CAPACITY>,
}

impl<const CAPACITY: usize> Effect<CAPACITY> {
    /// Create an empty effect.
    ///
    /// The pixel count and frame rate are clamped to at least one.
    pub fn new(config: &EffectConfig) -> Self {
        Self {
            id: config.id,
            led_count: config.led_count.max(1),
            fps: config.fps.max(1),
            segments: Vec::new(),
        }
    }

    pub const fn id(&self) -> u16 {
        self.id
    }

    pub const fn led_count(&self) -> usize {
        self.led_count
    }

    pub const fn fps(&self) -> u8 {
        self.fps
    }

    /// Seconds advanced by one frame
    pub fn frame_time(&self) -> f32 {
        1.0 / f32::from(self.fps)
    }

    pub const fn capacity(&self) -> usize {
        CAPACITY
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments in draw order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Range covering every pixel of this effect
    pub const fn full_range(&self) -> MoveRange {
        MoveRange::full(self.led_count)
    }

    /// Append a segment to the top of the draw order.
    ///
    /// Fails without touching the effect if the id is taken or the effect
    /// is full.
    pub fn add_segment(&mut self, segment: Segment) -> Result<(), EffectError> {
        let id = segment.id();
        if self.find_segment(id).is_some() {
            return Err(EffectError::DuplicateId(id));
        }
        self.segments
            .push(segment)
            .map_err(|_| EffectError::CapacityExceeded)?;
        #[cfg(feature = "esp32-log")]
        println!("[Effect.add_segment] added segment {} ({} total)", id, self.len());
        Ok(())
    }

    /// Create a default segment bounded to this effect and add it.
    ///
    /// `range` defaults to the full strip and is clamped to it.
    pub fn create_segment(
        &mut self,
        id: SegmentId,
        position: i32,
        range: Option<(i32, i32)>,
        now: Instant,
    ) -> Result<&mut Segment, EffectError> {
        let range = match range {
            Some((min, max)) => MoveRange::clamped(min, max, self.led_count),
            None => self.full_range(),
        };
        self.add_segment(Segment::new(id, position, range, now))?;
        self.segments
            .last_mut()
            .ok_or(EffectError::NotFound(id))
    }

    /// Remove a segment, keeping the order of the others
    pub fn remove_segment(&mut self, id: SegmentId) -> Result<Segment, EffectError> {
        let index = self
            .segments
            .iter()
            .position(|segment| segment.id() == id)
            .ok_or(EffectError::NotFound(id))?;
        let removed = self.segments.remove(index);
        #[cfg(feature = "esp32-log")]
        println!("[Effect.remove_segment] removed segment {}", id);
        Ok(removed)
    }

    pub fn find_segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.iter().find(|segment| segment.id() == id)
    }

    pub fn find_segment_mut(&mut self, id: SegmentId) -> Option<&mut Segment> {
        self.segments.iter_mut().find(|segment| segment.id() == id)
    }

    /// First segment in draw order
    pub fn first_segment_mut(&mut self) -> Option<&mut Segment> {
        self.segments.first_mut()
    }

    /// Remove every segment
    pub fn clear_segments(&mut self) {
        self.segments.clear();
    }

    /// Update pixel count and frame rate from untrusted values.
    ///
    /// The pixel count is limited to `max_leds` (the frame buffer size) and
    /// the frame rate to `1..=MAX_FPS`.
    pub fn apply_settings(&mut self, led_count: i32, fps: i32, max_leds: usize) {
        self.led_count = EffectConfig::clamped_led_count(led_count, max_leds);
        self.fps = EffectConfig::clamped_fps(fps);
        #[cfg(feature = "esp32-log")]
        println!(
            "[Effect.apply_settings] leds={} fps={}",
            self.led_count, self.fps
        );
    }

    /// Advance every segment by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        for segment in &mut self.segments {
            advance(segment, dt);
        }
    }

    /// Advance every segment by one frame
    pub fn tick_frame(&mut self) {
        self.tick(self.frame_time());
    }

    /// Clear the frame and draw all segments in order.
    ///
    /// Only the first `led_count` pixels of `frame` are touched.
    pub fn render<P: Palette + ?Sized>(&self, palette: &P, now: Instant, frame: &mut [Rgb]) {
        let len = self.led_count.min(frame.len());
        let frame = &mut frame[..len];
        clear(frame);
        for segment in &self.segments {
            render_segment(segment, palette, now, frame);
        }
    }
}
