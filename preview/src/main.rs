//! Desktop preview app for myrtio-segment-wave
//!
//! Renders a breathing segment wave in a window with interactive controls.
//! The segment writes into a `Strip`, which is flushed to the window on
//! every rendered frame.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use myrtio_segment_wave::{
    ChannelOverflow, Instant, Orientation, OutputDriver, Rgb, SegmentAnimator,
    SegmentConfig, Strip,
};

/// Maximum number of LEDs the strip supports
const MAX_LEDS: usize = 180;

/// Default number of LEDs in the animated segment
const DEFAULT_LED_COUNT: usize = 60;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Output driver that keeps the last flushed frame for drawing
#[derive(Default)]
struct PreviewOutput {
    frame: Vec<Rgb>,
}

impl OutputDriver for PreviewOutput {
    fn write(&mut self, colors: &[Rgb]) {
        self.frame.clear();
        self.frame.extend_from_slice(colors);
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 420.0])
            .with_title("Segment Wave Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-segment-wave-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    strip: Strip<PreviewOutput, MAX_LEDS>,
    segment: SegmentAnimator,

    // UI state (tracked to detect changes and reconfigure the segment)
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    color1: [u8; 3],
    color2: [u8; 3],
    amplitude: f32,
    reverse: bool,
    wrap_overflow: bool,
    /// LED pixel size for display
    led_size: f32,
    /// Number of LEDs in the segment
    led_count: usize,
}

impl PreviewApp {
    fn new() -> Self {
        let config = SegmentConfig::default();
        let (c1, c2) = (config.color1, config.color2);
        let amplitude = config.brightness_amplitude;

        let mut segment = SegmentAnimator::new(config);
        segment.configure(0, DEFAULT_LED_COUNT - 1, Orientation::Forward);

        Self {
            strip: Strip::new(PreviewOutput::default()),
            segment,
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            color1: [c1.r, c1.g, c1.b],
            color2: [c2.r, c2.g, c2.b],
            amplitude,
            reverse: false,
            wrap_overflow: false,
            led_size: LED_SIZE,
            led_count: DEFAULT_LED_COUNT,
        }
    }

    fn apply_bounds(&mut self) {
        self.strip.clear();
        self.segment.configure(
            0,
            self.led_count - 1,
            Orientation::from_reverse(self.reverse),
        );
    }

    fn apply_colors(&mut self) {
        let [r1, g1, b1] = self.color1;
        let [r2, g2, b2] = self.color2;
        self.segment
            .set_colors(Rgb::new(r1, g1, b1), Rgb::new(r2, g2, b2));
    }

    /// Reset time to zero
    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.last_frame = StdInstant::now();
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 =
                delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();

        let now = Instant::from_millis(self.t_ms);
        if self.segment.update(now, &mut self.strip) {
            self.strip.show();
        }
        let frame = self.strip.driver().frame.clone();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("⏮ Reset").clicked() {
                    self.reset_time();
                }
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.playing = !self.playing;
                }

                ui.add_space(8.0);
                let secs = self.t_ms / 1000;
                let ms = self.t_ms % 1000;
                ui.label(format!("Time: {secs}.{ms:03}s"));
                ui.label(format!("Phase: {}", self.segment.phase()));

                ui.add_space(8.0);
                ui.label("Speed:");
                ui.add(
                    egui::Slider::new(&mut self.time_scale, 0.1..=5.0)
                        .logarithmic(true),
                );
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Size: ");
                ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));

                ui.add_space(8.0);

                ui.label("LEDs:");
                let old_led_count = self.led_count;
                ui.add(egui::Slider::new(&mut self.led_count, 1usize..=MAX_LEDS));

                let old_reverse = self.reverse;
                ui.checkbox(&mut self.reverse, "Reverse");

                if self.led_count != old_led_count || self.reverse != old_reverse {
                    self.apply_bounds();
                }
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Colors:");
                let c1_changed = ui.color_edit_button_srgb(&mut self.color1).changed();
                let c2_changed = ui.color_edit_button_srgb(&mut self.color2).changed();
                if c1_changed || c2_changed {
                    self.apply_colors();
                }

                ui.add_space(8.0);

                ui.label("Amplitude:");
                if ui
                    .add(egui::Slider::new(&mut self.amplitude, 0.0..=2.0))
                    .changed()
                {
                    self.segment.set_brightness_amplitude(self.amplitude);
                }

                if ui.checkbox(&mut self.wrap_overflow, "Wrap overflow").changed() {
                    self.segment.set_overflow(if self.wrap_overflow {
                        ChannelOverflow::Wrap
                    } else {
                        ChannelOverflow::Saturate
                    });
                }
            });

            ui.add_space(16.0);

            // === LED Display ===
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = self.led_count.div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) = ui.allocate_painter(
                egui::vec2(available_width, height),
                egui::Sense::hover(),
            );
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.iter().take(self.led_count).enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }
        });
    }
}
