mod tests {
    use myrtio_segment_wave::{
        Orientation, Waveform,
        color::{
            Channel, ChannelOverflow, Rgb, channel, lerp_channel, lerp_color,
            lerp_color_mirror, narrow_channel, rgb_from_u32, rgb_to_u32, sine_mod_bright,
        },
        strip::Sin8,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const WARM: Rgb = Rgb {
        r: 200,
        g: 100,
        b: 50,
    };

    /// Sine table stuck at one value
    struct ConstSine(u8);

    impl Waveform for ConstSine {
        fn sine8(&self, _theta: u8) -> u8 {
            self.0
        }
    }

    #[test]
    fn test_channel() {
        let color = rgb_from_u32(0x12_34_56);
        assert_eq!(channel(color, Channel::Red), 0x12);
        assert_eq!(channel(color, Channel::Green), 0x34);
        assert_eq!(channel(color, Channel::Blue), 0x56);
        assert_eq!(rgb_to_u32(color), 0x12_34_56);
    }

    #[test]
    fn test_lerp_channel() {
        assert_eq!(lerp_channel(10, 200, 0.0), 10);
        assert_eq!(lerp_channel(10, 200, 1.0), 200);
        assert_eq!(lerp_channel(200, 10, 1.0), 10);
        assert_eq!(lerp_channel(0, 255, 0.5), 127);
        assert_eq!(lerp_channel(64, 0, 0.75), 16);
    }

    #[test]
    fn test_lerp_channel_monotonic() {
        let mut previous = lerp_channel(3, 250, 0.0);
        for step in 1..=100u8 {
            let current = lerp_channel(3, 250, f32::from(step) / 100.0);
            assert!(current >= previous, "step {step}: {current} < {previous}");
            previous = current;
        }
        assert_eq!(previous, 250);
    }

    #[test]
    fn test_lerp_color() {
        assert_eq!(lerp_color(RED, BLUE, 0.0), RED);
        assert_eq!(lerp_color(RED, BLUE, 1.0), BLUE);
        assert_eq!(lerp_color(RED, BLUE, 0.5), Rgb::new(127, 0, 127));
    }

    #[test]
    fn test_lerp_color_mirror() {
        for orientation in [Orientation::Forward, Orientation::Reversed] {
            assert_eq!(lerp_color_mirror(RED, BLUE, 0.0, orientation), RED);
            assert_eq!(lerp_color_mirror(RED, BLUE, 0.5, orientation), BLUE);
            assert_eq!(lerp_color_mirror(RED, BLUE, 1.0, orientation), RED);
            assert_eq!(
                lerp_color_mirror(RED, BLUE, 0.25, orientation),
                lerp_color_mirror(RED, BLUE, 0.75, orientation)
            );
        }
        assert_eq!(
            lerp_color_mirror(RED, BLUE, 0.25, Orientation::Forward),
            lerp_color(RED, BLUE, 0.5)
        );
    }

    #[test]
    fn test_narrow_channel() {
        assert_eq!(narrow_channel(-5.0, ChannelOverflow::Saturate), 0);
        assert_eq!(narrow_channel(300.7, ChannelOverflow::Saturate), 255);
        assert_eq!(narrow_channel(42.9, ChannelOverflow::Saturate), 42);
        assert_eq!(narrow_channel(300.7, ChannelOverflow::Wrap), 44);
        assert_eq!(narrow_channel(-1.5, ChannelOverflow::Wrap), 255);
        assert_eq!(narrow_channel(42.9, ChannelOverflow::Wrap), 42);
    }

    #[test]
    fn test_sine_mod_bright_without_amplitude() {
        for vector in [0, 64, 128, 192] {
            assert_eq!(
                sine_mod_bright(WARM, vector, 0.0, &Sin8, ChannelOverflow::Saturate),
                WARM
            );
        }
    }

    #[test]
    fn test_sine_mod_bright_trough_and_peak() {
        let trough = sine_mod_bright(WARM, 0, 1.0, &ConstSine(0), ChannelOverflow::Saturate);
        assert_eq!(trough, Rgb::new(100, 50, 25));

        let peak = sine_mod_bright(WARM, 0, 1.0, &ConstSine(255), ChannelOverflow::Saturate);
        assert_eq!(peak, Rgb::new(255, 150, 75));

        let wrapped = sine_mod_bright(WARM, 0, 1.0, &ConstSine(255), ChannelOverflow::Wrap);
        assert_eq!(wrapped, Rgb::new(44, 150, 75));
    }

    #[test]
    fn test_sine_mod_bright_excessive_amplitude() {
        let color = Rgb::new(100, 0, 0);
        let saturated = sine_mod_bright(color, 0, 4.0, &ConstSine(0), ChannelOverflow::Saturate);
        assert_eq!(saturated, Rgb::new(0, 0, 0));

        let wrapped = sine_mod_bright(color, 0, 4.0, &ConstSine(0), ChannelOverflow::Wrap);
        assert_eq!(wrapped, Rgb::new(156, 0, 0));
    }
}
