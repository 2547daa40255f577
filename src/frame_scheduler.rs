//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::color::Palette;
use crate::{OutputDriver, Renderer};

/// Frame duration for a frame rate (a zero rate is treated as 1 FPS)
pub fn frame_duration(fps: u8) -> Duration {
    Duration::from_micros(1_000_000 / u64::from(fps.max(1)))
}

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Paces frames at the effect's frame rate, re-read every frame so a
///   settings command takes effect immediately
/// - Skips the backlog after stalls longer than two frames
/// - Calls the renderer and hands the frame to the output driver
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, driver);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis() as u64);
/// }
/// ```
pub struct FrameScheduler<
    'a,
    O: OutputDriver,
    P: Palette,
    const MAX_LEDS: usize,
    const MAX_SEGMENTS: usize,
    const QUEUE_SIZE: usize,
> {
    output: O,
    renderer: Renderer<'a, P, MAX_LEDS, MAX_SEGMENTS, QUEUE_SIZE>,
    next_frame: Option<Instant>,
}

impl<
    'a,
    O: OutputDriver,
    P: Palette,
    const MAX_LEDS: usize,
    const MAX_SEGMENTS: usize,
    const QUEUE_SIZE: usize,
> FrameScheduler<'a, O, P, MAX_LEDS, MAX_SEGMENTS, QUEUE_SIZE>
{
    pub fn new(renderer: Renderer<'a, P, MAX_LEDS, MAX_SEGMENTS, QUEUE_SIZE>, driver: O) -> Self {
        Self {
            output: driver,
            renderer,
            next_frame: None,
        }
    }

    /// Current frame interval
    pub fn frame_duration(&self) -> Duration {
        frame_duration(self.renderer.effect().fps())
    }

    /// Render one frame, push it to the driver and plan the next one.
    ///
    /// Deadlines advance by whole frame intervals. When `now` is more than
    /// two intervals past the planned deadline the schedule restarts from
    /// `now` instead of bursting through the missed frames.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let interval = self.frame_duration();

        let planned = match self.next_frame {
            Some(next) if now <= next + interval * 2 => next,
            _ => now,
        };

        let frame = self.renderer.render(now);
        self.output.write(frame);

        let next_deadline = planned + interval;
        self.next_frame = Some(next_deadline);

        FrameResult {
            next_deadline,
            sleep_duration: next_deadline.saturating_duration_since(now),
        }
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<'a, P, MAX_LEDS, MAX_SEGMENTS, QUEUE_SIZE> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub fn renderer_mut(&mut self) -> &mut Renderer<'a, P, MAX_LEDS, MAX_SEGMENTS, QUEUE_SIZE> {
        &mut self.renderer
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }
}
