use crate::{
    PixelSink,
    bounds::SegmentBounds,
    color::{Rgb, lerp_color_mirror},
};

/// Phase offset applied to reversed segments
const REVERSED_PHASE_PIVOT: u8 = 128;

/// Direction of the gradient along a segment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Forward,
    /// Endpoint colors are swapped and the phase runs the other way
    Reversed,
}

impl Orientation {
    pub const fn from_reverse(reverse: bool) -> Self {
        if reverse { Self::Reversed } else { Self::Forward }
    }

    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::Reversed)
    }
}

/// Paint a mirrored, phase-shifted two-color gradient over `bounds`
///
/// Every pixel `start + i` gets `lerp_color_mirror(c1, c2, frac(i / span +
/// phase / 256))`, so advancing `phase` slides the wave along the segment.
/// A single-pixel segment is treated as position 0 and an inverted range
/// writes nothing. Pixels are only written, never read back.
#[allow(clippy::cast_precision_loss)]
pub fn render_gradient<P: PixelSink + ?Sized>(
    pixels: &mut P,
    c1: Rgb,
    c2: Rgb,
    bounds: SegmentBounds,
    phase: u8,
    orientation: Orientation,
) {
    if bounds.is_inverted() {
        return;
    }

    let (c1, c2, phase) = if orientation.is_reversed() {
        (c2, c1, REVERSED_PHASE_PIVOT.wrapping_sub(phase))
    } else {
        (c1, c2, phase)
    };

    let span = bounds.span();
    let shift = f32::from(phase) / 256.0;

    for offset in 0..=span {
        let position = if bounds.is_single() {
            0.0
        } else {
            offset as f32 / span as f32
        };
        let (position, _) = libm::modff(position + shift);

        pixels.set_pixel_color(
            bounds.start + offset,
            lerp_color_mirror(c1, c2, position, orientation),
        );
    }
}
