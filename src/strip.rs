//! In-memory strip buffer
//!
//! Collects pixel writes from one or more segments and flushes them to an
//! [`OutputDriver`] on [`Strip::show`].

use crate::{OutputDriver, PixelSink, Waveform, color::Rgb, math8::sin8};

/// Sine table backed by [`sin8`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Sin8;

impl Waveform for Sin8 {
    fn sine8(&self, theta: u8) -> u8 {
        sin8(theta)
    }
}

/// LED strip with a fixed-size frame buffer
///
/// N is the number of LEDs in the strip
pub struct Strip<O: OutputDriver, const N: usize> {
    output: O,
    frame_buffer: [Rgb; N],
}

impl<O: OutputDriver, const N: usize> Strip<O, N> {
    /// Create a new strip with all pixels off
    pub fn new(driver: O) -> Self {
        Self {
            output: driver,
            frame_buffer: [Rgb::default(); N],
        }
    }

    /// Number of pixels in the strip
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Buffered pixel colors
    pub fn pixels(&self) -> &[Rgb] {
        &self.frame_buffer
    }

    /// Turn all buffered pixels off
    ///
    /// Takes effect on the next [`Strip::show`].
    pub fn clear(&mut self) {
        self.frame_buffer = [Rgb::default(); N];
    }

    /// Flush the frame buffer to the output driver
    pub fn show(&mut self) {
        self.output.write(&self.frame_buffer);
    }

    /// Get a reference to the output driver.
    pub fn driver(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output driver.
    pub fn driver_mut(&mut self) -> &mut O {
        &mut self.output
    }
}

impl<O: OutputDriver, const N: usize> PixelSink for Strip<O, N> {
    /// Writes past the end of the strip are ignored
    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        self.frame_buffer.set_pixel_color(index, color);
    }
}
