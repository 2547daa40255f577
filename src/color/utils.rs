use crate::color::Rgb;

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Linearly interpolate two colors
///
/// # Arguments
/// * `a` - Color at `t = 0.0`
/// * `b` - Color at `t = 1.0`
/// * `t` - Interpolation fraction, expected in `0.0..=1.0`
///
/// Channels are truncated towards zero, matching the firmware output.
#[inline]
pub fn lerp_colors(a: Rgb, b: Rgb, t: f32) -> Rgb {
    Rgb {
        r: lerp_channel(a.r, b.r, t),
        g: lerp_channel(a.g, b.g, t),
        b: lerp_channel(a.b, b.b, t),
    }
}

/// Composite `color` over `existing` using a transparency weight.
///
/// `transparency` is the share of `existing` that passes through:
/// `0.0` paints `color` fully, `1.0` leaves `existing` untouched.
#[inline]
pub fn composite(existing: Rgb, color: Rgb, transparency: f32) -> Rgb {
    let coverage = 1.0 - transparency;
    Rgb {
        r: mix_channel(existing.r, transparency, color.r, coverage),
        g: mix_channel(existing.g, transparency, color.g, coverage),
        b: mix_channel(existing.b, transparency, color.b, coverage),
    }
}

#[inline]
fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    mix_channel(a, 1.0 - t, b, t)
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn mix_channel(a: u8, weight_a: f32, b: u8, weight_b: f32) -> u8 {
    // `as` saturates, so rounding noise above 255 or below 0 stays in range
    (f32::from(a) * weight_a + f32::from(b) * weight_b) as u8
}
