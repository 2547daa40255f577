mod palette;
mod utils;

use smart_leds::RGB8;

pub use palette::{
    BLACK, BLUE, CYAN, ColorId, DEFAULT_PALETTE, DefaultPalette, FixedPalette, GREEN,
    LIGHT_BLUE, MAGENTA, ORANGE, Palette, PURPLE, RED, WHITE, YELLOW,
};
pub use utils::{composite, lerp_colors, rgb_from_u32};

pub type Rgb = RGB8;
