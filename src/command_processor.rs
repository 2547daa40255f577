//! Command processing
//!
//! Drains queued remote commands and applies them to an effect. This is the
//! validation boundary: every value is clamped or rejected here, so the
//! render path only ever sees parameters inside their documented ranges.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bounds::MoveRange;
use crate::color::Palette;
use crate::command::{Action, Command, Param};
use crate::effect::Effect;
use crate::error::EffectError;
use crate::preset::PresetId;
use crate::queue::CommandReceiver;
use crate::segment::Segment;

/// Outcome of draining the queue once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandReport {
    /// Commands applied successfully
    pub applied: u16,
    /// Commands rejected by validation
    pub rejected: u16,
    /// Error of the most recent rejected command
    pub last_error: Option<EffectError>,
}

impl CommandReport {
    /// Check if any command was handled
    pub const fn has_changes(&self) -> bool {
        self.applied > 0
    }

    fn record(&mut self, result: Result<(), EffectError>) {
        match result {
            Ok(()) => self.applied = self.applied.saturating_add(1),
            Err(err) => {
                self.rejected = self.rejected.saturating_add(1);
                self.last_error = Some(err);
            }
        }
    }
}

/// Applies queued commands to an effect between frames
pub struct CommandProcessor<'a, const SIZE: usize> {
    commands: CommandReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> CommandProcessor<'a, SIZE> {
    pub const fn new(commands: CommandReceiver<'a, SIZE>) -> Self {
        Self { commands }
    }

    /// Apply all pending commands (non-blocking)
    ///
    /// `max_leds` is the size of the frame buffer and bounds the pixel count
    /// a settings command may request.
    pub fn process_pending<P: Palette + ?Sized, const CAPACITY: usize>(
        &mut self,
        effect: &mut Effect<CAPACITY>,
        palette: &P,
        max_leds: usize,
        now: Instant,
    ) -> CommandReport {
        let mut report = CommandReport::default();
        while let Some(command) = self.commands.take() {
            let result = apply_command(effect, &command, palette, max_leds, now);
            #[cfg(feature = "esp32-log")]
            log_rejected(&command, result);
            report.record(result);
        }
        report
    }
}

/// Validate a command and apply it to the effect.
///
/// A rejected command leaves the effect unchanged.
pub fn apply_command<P: Palette + ?Sized, const CAPACITY: usize>(
    effect: &mut Effect<CAPACITY>,
    command: &Command,
    palette: &P,
    max_leds: usize,
    now: Instant,
) -> Result<(), EffectError> {
    if command.effect != effect.id() {
        return Err(EffectError::WrongEffect(command.effect));
    }

    match command.action {
        Action::Create {
            segment,
            position,
            range,
        } => {
            effect.create_segment(segment, position, range, now)?;
        }
        Action::Delete(segment) => {
            effect.remove_segment(segment)?;
        }
        Action::Update { segment, param } => {
            let led_count = effect.led_count();
            let target = effect
                .find_segment_mut(segment)
                .ok_or(EffectError::NotFound(segment))?;
            apply_param(target, param, palette, led_count)?;
            #[cfg(feature = "esp32-log")]
            println!("[apply_command] segment {} {} updated", segment, param.field());
        }
        Action::ApplyPreset { segment, preset } => {
            let preset = u8::try_from(preset)
                .ok()
                .and_then(PresetId::from_raw)
                .ok_or(EffectError::UnknownPreset(preset))?;
            effect
                .find_segment_mut(segment)
                .ok_or(EffectError::NotFound(segment))?
                .apply_preset(preset.preset());
        }
        Action::Settings { led_count, fps } => {
            effect.apply_settings(led_count, fps, max_leds);
        }
    }
    Ok(())
}

#[cfg(feature = "esp32-log")]
fn log_rejected(command: &Command, result: Result<(), EffectError>) {
    if let Err(err) = result {
        println!("[CommandProcessor] rejected {:?}: {}", command.action, err);
    }
}

fn apply_param<P: Palette + ?Sized>(
    segment: &mut Segment,
    param: Param,
    palette: &P,
    led_count: usize,
) -> Result<(), EffectError> {
    match param {
        Param::Colors(colors) => {
            if palette.is_empty() {
                return Err(EffectError::InvalidParameter("palette is empty"));
            }
            segment.set_colors(colors, palette.max_id());
        }
        Param::Transparency(transparency) => segment.set_transparency(transparency),
        Param::Lengths(lengths) => segment.set_lengths(lengths),
        Param::Speed(speed) => segment.set_speed(speed)?,
        Param::Range(min, max) => segment.set_range(MoveRange::clamped(min, max, led_count)),
        Param::Position(position) => segment.set_position(position),
        Param::EdgeReflect(reflect) => segment.set_edge_reflect(reflect),
        Param::Dimmer(times) => segment.set_dimmer(times),
    }
    Ok(())
}
