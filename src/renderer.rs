use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Palette, Rgb};
use crate::command_processor::{CommandProcessor, CommandReport};
use crate::config::{DEFAULT_SEGMENT_ID, EffectConfig, RendererConfig};
use crate::cycler::PresetCycler;
use crate::effect::Effect;
use crate::queue::CommandReceiver;
use crate::segment::Segment;

/// Segment renderer - the main orchestrator
///
/// Owns the effect, the palette and the frame buffer. Remote commands are
/// applied only at the start of [`Renderer::render`], so a command is never
/// seen half-way through a frame.
pub struct Renderer<
    'a,
    P: Palette,
    const MAX_LEDS: usize,
    const MAX_SEGMENTS: usize,
    const QUEUE_SIZE: usize,
> {
    // External dependencies and configuration
    commands: CommandProcessor<'a, QUEUE_SIZE>,
    palette: P,

    // Internal state
    effect: Effect<MAX_SEGMENTS>,
    cycler: Option<PresetCycler>,
    last_report: CommandReport,
    frame_buffer: [Rgb; MAX_LEDS],
}

impl<'a, P: Palette, const MAX_LEDS: usize, const MAX_SEGMENTS: usize, const QUEUE_SIZE: usize>
    Renderer<'a, P, MAX_LEDS, MAX_SEGMENTS, QUEUE_SIZE>
{
    /// Create a renderer with its starting segment
    ///
    /// The configured pixel count is limited to `MAX_LEDS`.
    pub fn new(
        commands: CommandReceiver<'a, QUEUE_SIZE>,
        palette: P,
        config: &RendererConfig,
        now: Instant,
    ) -> Self {
        let effect_config = EffectConfig {
            led_count: config.effect.led_count.min(MAX_LEDS),
            ..config.effect
        };
        let mut effect = Effect::new(&effect_config);

        let range = effect.full_range();
        let segment = match config.start_preset {
            Some(preset) => Segment::from_preset(
                DEFAULT_SEGMENT_ID,
                config.start_position,
                range,
                now,
                preset.preset(),
            ),
            None => Segment::new(DEFAULT_SEGMENT_ID, config.start_position, range, now),
        };
        // Only fails for a zero-capacity effect, which then simply renders black
        effect.add_segment(segment).ok();

        Self {
            commands: CommandProcessor::new(commands),
            palette,
            effect,
            cycler: None,
            last_report: CommandReport::default(),
            frame_buffer: [Rgb::default(); MAX_LEDS],
        }
    }

    /// Process one frame
    ///
    /// This is the main render loop step: apply pending commands, advance
    /// every segment by one frame and composite them into the buffer.
    pub fn render(&mut self, now: Instant) -> &[Rgb] {
        self.process_commands(now);
        self.process_cycler(now);

        self.effect.tick_frame();
        self.effect.render(&self.palette, now, &mut self.frame_buffer);

        let len = self.effect.led_count().min(MAX_LEDS);
        &self.frame_buffer[..len]
    }

    /// Last composited frame
    pub fn frame(&self) -> &[Rgb] {
        let len = self.effect.led_count().min(MAX_LEDS);
        &self.frame_buffer[..len]
    }

    pub const fn effect(&self) -> &Effect<MAX_SEGMENTS> {
        &self.effect
    }

    /// Direct access to the effect for local (non-queued) changes
    pub fn effect_mut(&mut self) -> &mut Effect<MAX_SEGMENTS> {
        &mut self.effect
    }

    pub const fn palette(&self) -> &P {
        &self.palette
    }

    /// Outcome of the commands applied by the last frame
    pub const fn last_report(&self) -> CommandReport {
        self.last_report
    }

    /// Enable automatic preset rotation on the first segment
    pub fn start_cycling(&mut self, mut cycler: PresetCycler, now: Instant) {
        cycler.start(now);
        self.cycler = Some(cycler);
    }

    pub fn stop_cycling(&mut self) {
        self.cycler = None;
    }

    pub const fn cycler(&self) -> Option<&PresetCycler> {
        self.cycler.as_ref()
    }

    /// Mutable access to the running cycler, e.g. to skip or retime it
    pub fn cycler_mut(&mut self) -> Option<&mut PresetCycler> {
        self.cycler.as_mut()
    }

    /// Drain pending commands from the queue (non-blocking)
    fn process_commands(&mut self, now: Instant) {
        self.last_report =
            self.commands
                .process_pending(&mut self.effect, &self.palette, MAX_LEDS, now);
    }

    fn process_cycler(&mut self, now: Instant) {
        let Some(preset) = self.cycler.as_mut().and_then(|cycler| cycler.poll(now)) else {
            return;
        };
        if let Some(segment) = self.effect.first_segment_mut() {
            segment.apply_preset(preset.preset());
            #[cfg(feature = "esp32-log")]
            println!("[Renderer] cycled to preset {}", preset.as_str());
        }
    }
}
