use crate::{
    Waveform,
    color::{Orientation, Rgb},
};

/// A single 8-bit channel of an RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// How out-of-range channel arithmetic is narrowed back to a byte
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChannelOverflow {
    /// Clamp to `0..=255`
    #[default]
    Saturate,
    /// Truncate toward zero and keep the low 8 bits.
    ///
    /// The unsigned channel value wraps around, which shows up as color
    /// artifacts at high modulation amplitudes.
    Wrap,
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
#[allow(clippy::cast_lossless)]
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Extract a single channel from a color
#[inline]
pub const fn channel(color: Rgb, which: Channel) -> u8 {
    match which {
        Channel::Red => color.r,
        Channel::Green => color.g,
        Channel::Blue => color.b,
    }
}

/// Narrow a floating point channel value to a byte
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn narrow_channel(value: f32, overflow: ChannelOverflow) -> u8 {
    match overflow {
        // `as` saturates float to int casts (NaN becomes 0)
        ChannelOverflow::Saturate => value as u8,
        ChannelOverflow::Wrap => (libm::truncf(value) as i32) as u8,
    }
}

/// Linear interpolation between two channel values
///
/// Returns `a + t * (b - a)` truncated toward zero. `t` is expected in
/// `0.0..=1.0`; outside of it the result saturates at the byte edges.
#[inline]
pub fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    let a = f32::from(a);
    let b = f32::from(b);
    narrow_channel(a + t * (b - a), ChannelOverflow::Saturate)
}

/// Linear interpolation between two colors, channel by channel
///
/// # Arguments
/// * `c1` - Color at `t = 0.0`
/// * `c2` - Color at `t = 1.0`
/// * `t` - Position between the colors (0.0-1.0)
#[inline]
pub fn lerp_color(c1: Rgb, c2: Rgb, t: f32) -> Rgb {
    Rgb {
        r: lerp_channel(c1.r, c2.r, t),
        g: lerp_channel(c1.g, c2.g, t),
        b: lerp_channel(c1.b, c2.b, t),
    }
}

/// Mirrored interpolation: `c1 -> c2 -> c1` as `t` sweeps from 0.0 to 1.0
///
/// `t` is folded around the midpoint, so `t = 0.5` yields `c2` and both ends
/// yield `c1`. The orientation is resolved by the caller before this point
/// and does not change the fold.
#[inline]
pub fn lerp_color_mirror(
    c1: Rgb,
    c2: Rgb,
    t: f32,
    _orientation: Orientation,
) -> Rgb {
    let folded = if t < 0.5 { t * 2.0 } else { 1.0 - (t - 0.5) * 2.0 };
    lerp_color(c1, c2, folded)
}

/// Modulate color brightness with a sine wave
///
/// # Arguments
/// * `color` - Unmodulated color
/// * `vector` - Position on the sine period (0-255)
/// * `scalar` - Modulation depth, 0.0 disables it, 1.0 swings from black to
///   1.5x the input
/// * `sine` - Sine lookup
/// * `overflow` - Narrowing policy for channels pushed out of `0..=255`
pub fn sine_mod_bright<W: Waveform + ?Sized>(
    color: Rgb,
    vector: u8,
    scalar: f32,
    sine: &W,
    overflow: ChannelOverflow,
) -> Rgb {
    let value = (f32::from(sine.sine8(vector)) * scalar) / 255.0 - 0.5 * scalar;
    let modulate = |ch: u8| {
        let ch = f32::from(ch);
        narrow_channel(ch + ch * value, overflow)
    };

    Rgb {
        r: modulate(color.r),
        g: modulate(color.g),
        b: modulate(color.b),
    }
}
