mod tests {
    use myrtio_segment_wave::{
        Duration, FrameScheduler, Instant, OutputDriver, PixelSink, SegmentAnimator,
        Strip, color::Rgb,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

    /// Output driver that keeps every flushed frame
    #[derive(Default)]
    struct RecordingDriver {
        frames: Vec<Vec<Rgb>>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.push(colors.to_vec());
        }
    }

    #[test]
    fn test_strip_buffers_until_show() {
        let mut strip = Strip::<_, 4>::new(RecordingDriver::default());
        assert_eq!(strip.len(), 4);

        strip.set_pixel_color(1, RED);
        strip.set_pixel_color(9, RED);
        assert_eq!(strip.pixels(), &[Rgb::default(), RED, Rgb::default(), Rgb::default()]);
        assert!(strip.driver().frames.is_empty());

        strip.show();
        assert_eq!(strip.driver().frames.len(), 1);
        assert_eq!(strip.driver().frames[0], strip.pixels());

        strip.clear();
        assert_eq!(strip.pixels(), &[Rgb::default(); 4]);
    }

    #[test]
    fn test_scheduler_shows_rendered_frames() {
        let strip = Strip::<_, 4>::new(RecordingDriver::default());
        let mut scheduler = FrameScheduler::new(strip, SegmentAnimator::with_bounds(0, 3));

        let result = scheduler.tick(Instant::from_millis(0));
        assert!(!result.shown);
        assert_eq!(result.sleep_duration, Duration::from_millis(11));
        assert!(scheduler.strip().driver().frames.is_empty());

        let result = scheduler.tick(Instant::from_millis(11));
        assert!(result.shown);
        assert_eq!(result.next_deadline, Instant::from_millis(22));
        assert_eq!(result.sleep_duration, Duration::from_millis(11));
        assert_eq!(scheduler.strip().driver().frames.len(), 1);
        assert_eq!(scheduler.segment().phase(), 2);
    }

    #[test]
    fn test_scheduler_drift_correction() {
        let strip = Strip::<_, 2>::new(RecordingDriver::default());
        let mut scheduler = FrameScheduler::new(strip, SegmentAnimator::default());

        scheduler.tick(Instant::from_millis(0));
        let result = scheduler.tick(Instant::from_millis(1000));
        assert!(result.shown);
        assert_eq!(result.next_deadline, Instant::from_millis(1011));
        assert_eq!(result.sleep_duration, Duration::from_millis(11));
    }

    #[test]
    fn test_scheduler_near_timer_end() {
        let strip = Strip::<_, 2>::new(RecordingDriver::default());
        let mut scheduler = FrameScheduler::new(strip, SegmentAnimator::default());

        let now = Instant::from_ticks(u64::MAX - Duration::from_millis(5).as_ticks());
        let result = scheduler.tick(now);
        assert!(result.shown);
        assert!(result.sleep_duration <= Duration::from_millis(22));
    }

    #[test]
    fn test_scheduler_keeps_pace_across_timer_wrap() {
        let strip = Strip::<_, 2>::new(RecordingDriver::default());
        let mut scheduler = FrameScheduler::new(strip, SegmentAnimator::default());

        let mut now = Instant::from_ticks(u64::MAX - Duration::from_millis(100).as_ticks());
        for _ in 0..12 {
            let result = scheduler.tick(now);
            assert!(result.shown);
            assert_eq!(result.sleep_duration, Duration::from_millis(11));
            now = result.next_deadline;
        }

        // The last deadline lies past the wrap
        assert!(now.as_ticks() < Duration::from_millis(100).as_ticks());
        assert_eq!(scheduler.strip().driver().frames.len(), 12);
        assert_eq!(scheduler.segment().phase(), 24);
    }
}
