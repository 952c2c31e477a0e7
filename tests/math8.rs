mod tests {
    use myrtio_segment_wave::math8::{scale_phase, sin8};

    #[test]
    fn test_sin8() {
        assert_eq!(sin8(0), 128);
        assert_eq!(sin8(32), 218);
        assert_eq!(sin8(64), 255);
        assert_eq!(sin8(96), 218);
        assert_eq!(sin8(128), 128);
        assert_eq!(sin8(192), 1);
    }

    #[test]
    fn test_sin8_halves() {
        for theta in 1..128u8 {
            let upper = u16::from(sin8(theta));
            let lower = u16::from(sin8(theta + 128));
            assert!(upper >= 128, "sin8({theta}) = {upper}");
            assert!(lower <= 128, "sin8({}) = {lower}", theta + 128);
        }
    }

    #[test]
    fn test_scale_phase() {
        assert_eq!(scale_phase(0, 2.0), 0);
        assert_eq!(scale_phase(100, 2.0), 200);
        assert_eq!(scale_phase(254, 2.0), 252);
        assert_eq!(scale_phase(255, 0.5), 127);
        assert_eq!(scale_phase(10, 0.0), 0);
        assert_eq!(scale_phase(200, 1.0), 200);
    }
}
