//! Named segment parameter bundles
//!
//! Presets are plain data. Applying one overwrites the animation fields of a
//! segment and nothing else, so the result is fully determined by the tables
//! below.

use crate::color::{
    BLACK, BLUE, CYAN, ColorId, GREEN, MAGENTA, ORANGE, RED, WHITE, YELLOW,
};
use crate::segment::{CONTROL_POINTS, DimmerCycle};

const PRESET_NAME_RAINBOW_FLOW: &str = "rainbow_flow";
const PRESET_NAME_BREATHING: &str = "breathing";
const PRESET_NAME_POLICE_LIGHTS: &str = "police_lights";
const PRESET_NAME_COLOR_WIPE: &str = "color_wipe";
const PRESET_NAME_PULSE: &str = "pulse";
const PRESET_NAME_CYLON: &str = "cylon";
const PRESET_NAME_RAINBOW_CYCLE: &str = "rainbow_cycle";
const PRESET_NAME_SPARKLE: &str = "sparkle";
const PRESET_NAME_FIRE: &str = "fire";
const PRESET_NAME_OCEAN_WAVES: &str = "ocean_waves";

const PRESET_ID_RAINBOW_FLOW: u8 = 1;
const PRESET_ID_BREATHING: u8 = 2;
const PRESET_ID_POLICE_LIGHTS: u8 = 3;
const PRESET_ID_COLOR_WIPE: u8 = 4;
const PRESET_ID_PULSE: u8 = 5;
const PRESET_ID_CYLON: u8 = 6;
const PRESET_ID_RAINBOW_CYCLE: u8 = 7;
const PRESET_ID_SPARKLE: u8 = 8;
const PRESET_ID_FIRE: u8 = 9;
const PRESET_ID_OCEAN_WAVES: u8 = 10;

/// Animation parameters carried by a preset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub colors: [ColorId; CONTROL_POINTS],
    pub transparency: [f32; CONTROL_POINTS],
    pub lengths: [u16; CONTROL_POINTS - 1],
    pub speed: f32,
    pub edge_reflect: bool,
    pub dimmer: DimmerCycle,
}

/// Flowing four-hue gradient
pub const RAINBOW_FLOW: Preset = Preset {
    name: PRESET_NAME_RAINBOW_FLOW,
    colors: [RED, BLUE, YELLOW, GREEN],
    transparency: [0.0, 0.0, 0.0, 0.0],
    lengths: [30, 30, 30],
    speed: 20.0,
    edge_reflect: false,
    dimmer: DimmerCycle::from_array([0, 500, 4_500, 5_000, 5_000]),
};

/// Slow white breathing pulse
pub const BREATHING: Preset = Preset {
    name: PRESET_NAME_BREATHING,
    colors: [WHITE, WHITE, WHITE, WHITE],
    transparency: [0.0, 0.0, 0.0, 0.0],
    lengths: [1, 1, 1],
    speed: 0.0,
    edge_reflect: false,
    dimmer: DimmerCycle::from_array([0, 2_000, 2_000, 4_000, 4_000]),
};

/// Fast alternating red/blue strobe
pub const POLICE_LIGHTS: Preset = Preset {
    name: PRESET_NAME_POLICE_LIGHTS,
    colors: [RED, BLUE, RED, BLUE],
    transparency: [0.0, 0.0, 0.0, 0.0],
    lengths: [20, 20, 20],
    speed: 100.0,
    edge_reflect: false,
    dimmer: DimmerCycle::from_array([0, 100, 100, 200, 200]),
};

/// Traveling magenta band with a fade to black
pub const COLOR_WIPE: Preset = Preset {
    name: PRESET_NAME_COLOR_WIPE,
    colors: [BLACK, MAGENTA, BLACK, MAGENTA],
    transparency: [0.0, 0.0, 0.0, 0.0],
    lengths: [50, 50, 50],
    speed: 50.0,
    edge_reflect: false,
    dimmer: DimmerCycle::from_array([0, 0, 0, 0, 1_000]),
};

/// Stationary pulsing orange block
pub const PULSE: Preset = Preset {
    name: PRESET_NAME_PULSE,
    colors: [ORANGE, ORANGE, ORANGE, ORANGE],
    transparency: [0.0, 0.0, 0.0, 0.0],
    lengths: [10, 10, 10],
    speed: 0.0,
    edge_reflect: false,
    dimmer: DimmerCycle::from_array([0, 500, 500, 1_000, 1_000]),
};

/// Red scanner bouncing between the range edges
pub const CYLON: Preset = Preset {
    name: PRESET_NAME_CYLON,
    colors: [RED, RED, RED, RED],
    transparency: [0.5, 0.0, 0.0, 0.5],
    lengths: [10, 5, 10],
    speed: 30.0,
    edge_reflect: true,
    dimmer: DimmerCycle::from_array([0, 0, 0, 0, 1_000]),
};

pub const RAINBOW_CYCLE: Preset = Preset {
    name: PRESET_NAME_RAINBOW_CYCLE,
    colors: [RED, BLUE, MAGENTA, ORANGE],
    transparency: [0.0, 0.0, 0.0, 0.0],
    lengths: [33, 33, 33],
    speed: 10.0,
    edge_reflect: false,
    dimmer: DimmerCycle::from_array([0, 500, 4_500, 5_000, 5_000]),
};

pub const SPARKLE: Preset = Preset {
    name: PRESET_NAME_SPARKLE,
    colors: [WHITE, BLACK, WHITE, BLACK],
    transparency: [0.0, 0.5, 0.0, 0.5],
    lengths: [1, 10, 1],
    speed: 150.0,
    edge_reflect: false,
    dimmer: DimmerCycle::from_array([0, 50, 50, 100, 100]),
};

pub const FIRE: Preset = Preset {
    name: PRESET_NAME_FIRE,
    colors: [RED, ORANGE, ORANGE, RED],
    transparency: [0.3, 0.0, 0.0, 0.3],
    lengths: [20, 20, 20],
    speed: 15.0,
    edge_reflect: false,
    dimmer: DimmerCycle::from_array([0, 200, 300, 500, 500]),
};

pub const OCEAN_WAVES: Preset = Preset {
    name: PRESET_NAME_OCEAN_WAVES,
    colors: [BLUE, CYAN, BLUE, CYAN],
    transparency: [0.2, 0.0, 0.2, 0.0],
    lengths: [40, 40, 40],
    speed: 8.0,
    edge_reflect: false,
    dimmer: DimmerCycle::from_array([0, 1_000, 1_000, 2_000, 2_000]),
};

/// Known preset ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PresetId {
    RainbowFlow = PRESET_ID_RAINBOW_FLOW,
    Breathing = PRESET_ID_BREATHING,
    PoliceLights = PRESET_ID_POLICE_LIGHTS,
    ColorWipe = PRESET_ID_COLOR_WIPE,
    Pulse = PRESET_ID_PULSE,
    Cylon = PRESET_ID_CYLON,
    RainbowCycle = PRESET_ID_RAINBOW_CYCLE,
    Sparkle = PRESET_ID_SPARKLE,
    Fire = PRESET_ID_FIRE,
    OceanWaves = PRESET_ID_OCEAN_WAVES,
}

impl PresetId {
    /// All presets in id order
    pub const ALL: [Self; 10] = [
        Self::RainbowFlow,
        Self::Breathing,
        Self::PoliceLights,
        Self::ColorWipe,
        Self::Pulse,
        Self::Cylon,
        Self::RainbowCycle,
        Self::Sparkle,
        Self::Fire,
        Self::OceanWaves,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PRESET_ID_RAINBOW_FLOW => Self::RainbowFlow,
            PRESET_ID_BREATHING => Self::Breathing,
            PRESET_ID_POLICE_LIGHTS => Self::PoliceLights,
            PRESET_ID_COLOR_WIPE => Self::ColorWipe,
            PRESET_ID_PULSE => Self::Pulse,
            PRESET_ID_CYLON => Self::Cylon,
            PRESET_ID_RAINBOW_CYCLE => Self::RainbowCycle,
            PRESET_ID_SPARKLE => Self::Sparkle,
            PRESET_ID_FIRE => Self::Fire,
            PRESET_ID_OCEAN_WAVES => Self::OceanWaves,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn preset(self) -> &'static Preset {
        match self {
            Self::RainbowFlow => &RAINBOW_FLOW,
            Self::Breathing => &BREATHING,
            Self::PoliceLights => &POLICE_LIGHTS,
            Self::ColorWipe => &COLOR_WIPE,
            Self::Pulse => &PULSE,
            Self::Cylon => &CYLON,
            Self::RainbowCycle => &RAINBOW_CYCLE,
            Self::Sparkle => &SPARKLE,
            Self::Fire => &FIRE,
            Self::OceanWaves => &OCEAN_WAVES,
        }
    }

    pub const fn as_str(self) -> &'static str {
        self.preset().name
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PRESET_NAME_RAINBOW_FLOW => Some(Self::RainbowFlow),
            PRESET_NAME_BREATHING => Some(Self::Breathing),
            PRESET_NAME_POLICE_LIGHTS => Some(Self::PoliceLights),
            PRESET_NAME_COLOR_WIPE => Some(Self::ColorWipe),
            PRESET_NAME_PULSE => Some(Self::Pulse),
            PRESET_NAME_CYLON => Some(Self::Cylon),
            PRESET_NAME_RAINBOW_CYCLE => Some(Self::RainbowCycle),
            PRESET_NAME_SPARKLE => Some(Self::Sparkle),
            PRESET_NAME_FIRE => Some(Self::Fire),
            PRESET_NAME_OCEAN_WAVES => Some(Self::OceanWaves),
            _ => None,
        }
    }
}
