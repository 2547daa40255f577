//! Static configuration read once when the effect is built

use crate::preset::PresetId;

/// Default number of pixels on the strip
pub const DEFAULT_LED_COUNT: usize = 100;

/// Default animation frame rate
pub const DEFAULT_FPS: u8 = 30;

/// Highest frame rate accepted from configuration or remote settings
pub const MAX_FPS: u8 = 120;

/// Id used for the single effect when none is configured
pub const DEFAULT_EFFECT_ID: u16 = 1;

/// Id of the segment the renderer starts with
pub const DEFAULT_SEGMENT_ID: u16 = 1;

/// Effect level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectConfig {
    /// Effect id used to address remote commands
    pub id: u16,
    /// Number of driven pixels
    pub led_count: usize,
    /// Frames per second
    pub fps: u8,
}

impl EffectConfig {
    /// Frame rate clamped to the supported range
    pub fn clamped_fps(fps: i32) -> u8 {
        let fps = fps.clamp(1, i32::from(MAX_FPS));
        u8::try_from(fps).unwrap_or(DEFAULT_FPS)
    }

    /// Pixel count clamped to `1..=max_leds`
    pub fn clamped_led_count(led_count: i32, max_leds: usize) -> usize {
        let count = usize::try_from(led_count.max(1)).unwrap_or(1);
        count.min(max_leds.max(1))
    }
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_EFFECT_ID,
            led_count: DEFAULT_LED_COUNT,
            fps: DEFAULT_FPS,
        }
    }
}

/// Configuration for the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RendererConfig {
    pub effect: EffectConfig,
    /// Preset applied to the starting segment, `None` keeps segment defaults
    pub start_preset: Option<PresetId>,
    /// Start position of the starting segment
    pub start_position: i32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            effect: EffectConfig::default(),
            start_preset: None,
            start_position: 0,
        }
    }
}
