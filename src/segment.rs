//! Breathing gradient wave for a single strip segment
//!
//! On every due tick the segment modulates the brightness of its two
//! endpoint colors with a sine wave and repaints its pixel range with a
//! mirrored gradient between them, shifted by the current phase.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    PixelSink, Waveform,
    bounds::SegmentBounds,
    color::{ChannelOverflow, Orientation, Rgb, render_gradient, sine_mod_bright},
    math8::scale_phase,
    strip::Sin8,
};

/// Minimum time between two render passes
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(10);

/// Phase advance per render pass (128 passes per full cycle)
pub const PHASE_STEP: u8 = 2;

pub const DEFAULT_COLOR1: Rgb = Rgb { r: 64, g: 0, b: 0 };
pub const DEFAULT_COLOR2: Rgb = Rgb { r: 0, g: 64, b: 0 };
pub const DEFAULT_BRIGHTNESS_AMPLITUDE: f32 = 0.5;

/// Brightness oscillation runs at half the phase rate
pub const DEFAULT_BRIGHTNESS_FREQUENCY: f32 = 0.5;
/// Gradient sweep runs at twice the phase rate
pub const DEFAULT_GRADIENT_FREQUENCY: f32 = 2.0;

/// Configuration for a segment animator
#[derive(Debug, Clone)]
pub struct SegmentConfig {
    pub bounds: SegmentBounds,
    pub orientation: Orientation,
    pub color1: Rgb,
    pub color2: Rgb,
    /// Depth of the brightness oscillation (0.0 = none, 1.0 = down to black)
    pub brightness_amplitude: f32,
    /// Phase multiplier for the brightness sine
    pub brightness_frequency: f32,
    /// Phase multiplier for the gradient shift
    pub gradient_frequency: f32,
    /// Minimum time between two render passes
    pub interval: Duration,
    /// Narrowing policy for modulated channels
    pub overflow: ChannelOverflow,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            bounds: SegmentBounds::new(0, 1),
            orientation: Orientation::Forward,
            color1: DEFAULT_COLOR1,
            color2: DEFAULT_COLOR2,
            brightness_amplitude: DEFAULT_BRIGHTNESS_AMPLITUDE,
            brightness_frequency: DEFAULT_BRIGHTNESS_FREQUENCY,
            gradient_frequency: DEFAULT_GRADIENT_FREQUENCY,
            interval: DEFAULT_INTERVAL,
            overflow: ChannelOverflow::Saturate,
        }
    }
}

/// Animation state of one strip segment
///
/// `phase` and `last_tick` only move forward through [`SegmentAnimator::update`].
#[derive(Debug, Clone)]
pub struct SegmentAnimator<W: Waveform = Sin8> {
    config: SegmentConfig,
    sine: W,
    phase: u8,
    last_tick: Instant,
}

impl Default for SegmentAnimator {
    fn default() -> Self {
        Self::new(SegmentConfig::default())
    }
}

impl SegmentAnimator {
    /// Create a new animator using the built-in sine table
    pub fn new(config: SegmentConfig) -> Self {
        Self::with_waveform(config, Sin8)
    }

    /// Create an animator with default colors over `start..=end`
    pub fn with_bounds(start: usize, end: usize) -> Self {
        Self::new(SegmentConfig {
            bounds: SegmentBounds::new(start, end),
            ..SegmentConfig::default()
        })
    }
}

impl<W: Waveform> SegmentAnimator<W> {
    /// Create a new animator with a custom sine table
    pub const fn with_waveform(config: SegmentConfig, sine: W) -> Self {
        Self {
            config,
            sine,
            phase: 0,
            last_tick: Instant::from_ticks(0),
        }
    }

    /// Set the pixel range and orientation
    ///
    /// `start <= end` and both indices inside the pixel buffer are expected;
    /// neither is checked here.
    pub fn configure(&mut self, start: usize, end: usize, orientation: Orientation) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[SegmentAnimator.configure] bounds {:?}..={:?} ({:?})",
            start, end, orientation
        );
        self.config.bounds = SegmentBounds::new(start, end);
        self.config.orientation = orientation;
    }

    /// Replace the endpoint colors, applied on the next render pass
    pub fn set_colors(&mut self, color1: Rgb, color2: Rgb) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[SegmentAnimator.set_colors] setting colors to {:?}, {:?}",
            color1, color2
        );
        self.config.color1 = color1;
        self.config.color2 = color2;
    }

    /// Set the brightness oscillation depth
    ///
    /// Values outside 0.0-1.0 are accepted and produce inverted or
    /// exaggerated swings.
    pub fn set_brightness_amplitude(&mut self, amplitude: f32) {
        self.config.brightness_amplitude = amplitude;
    }

    /// Select how modulated channels are narrowed back to a byte
    pub fn set_overflow(&mut self, overflow: ChannelOverflow) {
        self.config.overflow = overflow;
    }

    /// Advance the animation if the tick interval has passed
    ///
    /// Returns true if a render pass was performed. The pixels are only
    /// buffered; flushing them is up to the caller.
    pub fn update<P: PixelSink + ?Sized>(
        &mut self,
        now: Instant,
        pixels: &mut P,
    ) -> bool {
        // Wrapping subtraction keeps the gate correct across timer overflow
        let elapsed =
            Duration::from_ticks(now.as_ticks().wrapping_sub(self.last_tick.as_ticks()));
        if elapsed <= self.config.interval {
            return false;
        }

        let cfg = &self.config;
        let vector = scale_phase(self.phase, cfg.brightness_frequency);
        let color1 = sine_mod_bright(
            cfg.color1,
            vector,
            cfg.brightness_amplitude,
            &self.sine,
            cfg.overflow,
        );
        let color2 = sine_mod_bright(
            cfg.color2,
            vector,
            cfg.brightness_amplitude,
            &self.sine,
            cfg.overflow,
        );

        render_gradient(
            pixels,
            color1,
            color2,
            cfg.bounds,
            scale_phase(self.phase, cfg.gradient_frequency),
            cfg.orientation,
        );

        self.last_tick = now;
        self.phase = self.phase.wrapping_add(PHASE_STEP);
        true
    }

    /// Current position in the animation cycle
    pub const fn phase(&self) -> u8 {
        self.phase
    }

    /// Time of the last render pass
    pub const fn last_tick(&self) -> Instant {
        self.last_tick
    }

    pub const fn bounds(&self) -> SegmentBounds {
        self.config.bounds
    }

    pub const fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    /// Unmodulated endpoint colors
    pub const fn colors(&self) -> (Rgb, Rgb) {
        (self.config.color1, self.config.color2)
    }

    pub const fn brightness_amplitude(&self) -> f32 {
        self.config.brightness_amplitude
    }

    pub const fn interval(&self) -> Duration {
        self.config.interval
    }
}
