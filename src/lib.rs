#![no_std]

pub mod bounds;
pub mod color;
pub mod frame_scheduler;
pub mod math8;
pub mod segment;
pub mod strip;

pub use bounds::SegmentBounds;
pub use color::{ChannelOverflow, Orientation, Rgb};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use segment::{SegmentAnimator, SegmentConfig};
pub use strip::{Sin8, Strip};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The strip buffer is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

/// Writable pixel buffer
///
/// Writes are buffered; transmission to the hardware is up to the owner
/// of the buffer (see [`Strip::show`]).
pub trait PixelSink {
    /// Set the color of a single pixel
    fn set_pixel_color(&mut self, index: usize, color: Rgb);
}

/// Periodic 8-bit sine lookup
pub trait Waveform {
    /// Sine of `theta` over a 256-step period, mapped to 0-255
    fn sine8(&self, theta: u8) -> u8;
}

impl PixelSink for [Rgb] {
    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.get_mut(index) {
            *pixel = color;
        }
    }
}

impl<const N: usize> PixelSink for [Rgb; N] {
    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        self.as_mut_slice().set_pixel_color(index, color);
    }
}
