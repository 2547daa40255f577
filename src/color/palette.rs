//! Discrete color palettes
//!
//! Segments never carry RGB values directly, only small color ids that are
//! resolved through a [`Palette`] at render time.

use crate::color::{Rgb, rgb_from_u32};

/// Index into a palette
pub type ColorId = u8;

pub const BLACK: ColorId = 0;
pub const RED: ColorId = 1;
pub const GREEN: ColorId = 2;
pub const BLUE: ColorId = 3;
pub const YELLOW: ColorId = 4;
pub const MAGENTA: ColorId = 5;
pub const CYAN: ColorId = 6;
pub const WHITE: ColorId = 7;
pub const ORANGE: ColorId = 8;
pub const PURPLE: ColorId = 9;
pub const LIGHT_BLUE: ColorId = 10;

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),*) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

#[allow(clippy::unreadable_literal)]
const DEFAULT_COLORS: [Rgb; 11] = hex_palette![
    0x000000, // Black
    0xFF0000, // Red
    0x00FF00, // Green
    0x0000FF, // Blue
    0xFFFF00, // Yellow
    0xFF00FF, // Magenta
    0x00FFFF, // Cyan
    0xFFFFFF, // White
    0xFF7F00, // Orange
    0x7F00FF, // Purple
    0x007FFF  // Light blue
];

/// Palette used when the application does not supply its own
pub const DEFAULT_PALETTE: DefaultPalette = FixedPalette::new(DEFAULT_COLORS);

pub type DefaultPalette = FixedPalette<11>;

/// Color id to RGB lookup
pub trait Palette {
    /// Resolve a color id. Ids outside the palette resolve to black.
    fn color_of(&self, id: ColorId) -> Rgb;

    /// Number of addressable colors
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Highest valid color id
    #[allow(clippy::cast_possible_truncation)]
    fn max_id(&self) -> ColorId {
        self.len().saturating_sub(1).min(usize::from(ColorId::MAX)) as ColorId
    }
}

/// Palette backed by a fixed array of colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPalette<const N: usize> {
    colors: [Rgb; N],
}

impl<const N: usize> FixedPalette<N> {
    pub const fn new(colors: [Rgb; N]) -> Self {
        Self { colors }
    }

    pub const fn colors(&self) -> &[Rgb; N] {
        &self.colors
    }
}

impl Default for DefaultPalette {
    fn default() -> Self {
        DEFAULT_PALETTE
    }
}

impl<const N: usize> Palette for FixedPalette<N> {
    fn color_of(&self, id: ColorId) -> Rgb {
        self.colors
            .get(usize::from(id))
            .copied()
            .unwrap_or(Rgb { r: 0, g: 0, b: 0 })
    }

    fn len(&self) -> usize {
        N
    }
}
