#![no_std]

pub mod bounds;
pub mod color;
pub mod command;
pub mod command_processor;
pub mod config;
pub mod cycler;
pub mod effect;
pub mod error;
pub mod frame_scheduler;
pub mod preset;
pub mod queue;
pub mod raster;
pub mod renderer;
pub mod segment;

pub use bounds::MoveRange;
pub use command::{Action, Arg, Command, Param};
pub use command_processor::{CommandProcessor, CommandReport, apply_command};
pub use config::{EffectConfig, RendererConfig};
pub use cycler::PresetCycler;
pub use effect::Effect;
pub use error::EffectError;
pub use frame_scheduler::FrameScheduler;
pub use preset::{Preset, PresetId};
pub use queue::{CommandQueue, CommandReceiver, CommandSender, QueueFull};
pub use renderer::Renderer;
pub use segment::{DimmerCycle, Direction, Segment, SegmentId};

pub use color::{ColorId, DEFAULT_PALETTE, DefaultPalette, FixedPalette, Palette, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
