/// Slope/offset table for `sin8`, interleaved as `(b, m16)` pairs
const SIN8_INTERLEAVE: [u8; 8] = [0, 49, 49, 41, 90, 27, 117, 10];

/// Fast 8-bit sine approximation (ported from `FastLED`)
///
/// One period spans the whole input range. The output is centered at 128:
/// `sin8(0) == 128`, `sin8(64) == 255`, `sin8(192) == 1`.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless
)]
pub const fn sin8(theta: u8) -> u8 {
    let mut offset = theta;
    if theta & 0x40 != 0 {
        offset = 255 - offset;
    }
    offset &= 0x3F;

    let mut sec_offset = offset & 0x0F;
    if theta & 0x40 != 0 {
        sec_offset += 1;
    }

    let section = (offset >> 4) as usize;
    let b = SIN8_INTERLEAVE[section * 2];
    let m16 = SIN8_INTERLEAVE[section * 2 + 1];

    let mx = ((m16 as u16 * sec_offset as u16) >> 4) as i16;
    let mut y = mx + b as i16;
    if theta & 0x80 != 0 {
        y = -y;
    }

    (y + 128) as u8
}

/// Scale a phase counter by a frequency multiplier
///
/// The product is truncated and wrapped onto the 0-255 cycle, so a
/// multiplier of 2.0 runs twice as fast and 0.5 half as fast.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale_phase(phase: u8, frequency: f32) -> u8 {
    let scaled = libm::truncf(f32::from(phase) * frequency) as i64;
    scaled.rem_euclid(256) as u8
}
