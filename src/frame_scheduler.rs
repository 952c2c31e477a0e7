//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::{OutputDriver, SegmentAnimator, Strip, Waveform, strip::Sin8};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// Whether the segment rendered and the strip was flushed.
    pub shown: bool,
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that drives one segment on a strip.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Updates the segment and flushes the strip when it rendered
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(Strip::<_, 60>::new(driver), segment);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis() as u64);
/// }
/// ```
pub struct FrameScheduler<O: OutputDriver, const N: usize, W: Waveform = Sin8> {
    strip: Strip<O, N>,
    segment: SegmentAnimator<W>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<O: OutputDriver, const N: usize, W: Waveform> FrameScheduler<O, N, W> {
    /// Create a new frame scheduler.
    ///
    /// Frames are paced one tick interval (plus one millisecond) apart, so
    /// each frame passes the segment's tick gate.
    pub fn new(strip: Strip<O, N>, segment: SegmentAnimator<W>) -> Self {
        let frame_duration = segment.interval() + Duration::from_millis(1);
        Self::with_frame_duration(strip, segment, frame_duration)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub const fn with_frame_duration(
        strip: Strip<O, N>,
        segment: SegmentAnimator<W>,
        frame_duration: Duration,
    ) -> Self {
        Self {
            strip,
            segment,
            next_frame: Instant::from_ticks(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've drifted too far off schedule
    /// 2. Updates the segment
    /// 3. Flushes the strip if the segment rendered
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Drift correction: if we're more than two frames off schedule, reset
        // to now. This prevents catch-up bursts after long stalls.
        // Tick math wraps so the schedule survives timer overflow.
        let max_drift = self.frame_duration.as_ticks().saturating_mul(2);
        let lag = Self::ticks_between(self.next_frame, now);
        if lag.unsigned_abs() > max_drift {
            self.next_frame = now;
        }

        let shown = self.segment.update(now, &mut self.strip);
        if shown {
            self.strip.show();
        }

        // Calculate next frame deadline
        self.next_frame = Instant::from_ticks(
            self.next_frame
                .as_ticks()
                .wrapping_add(self.frame_duration.as_ticks()),
        );

        // Calculate sleep duration (may be zero if we're behind)
        let ahead = Self::ticks_between(now, self.next_frame);
        let sleep_duration = Duration::from_ticks(ahead.max(0).unsigned_abs());

        FrameResult {
            shown,
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Signed tick distance from `from` to `to` on the wrapping timer
    #[allow(clippy::cast_possible_wrap)]
    const fn ticks_between(from: Instant, to: Instant) -> i64 {
        to.as_ticks().wrapping_sub(from.as_ticks()) as i64
    }

    /// Get a reference to the strip.
    pub fn strip(&self) -> &Strip<O, N> {
        &self.strip
    }

    /// Get a mutable reference to the strip.
    pub fn strip_mut(&mut self) -> &mut Strip<O, N> {
        &mut self.strip
    }

    /// Get a reference to the segment.
    pub fn segment(&self) -> &SegmentAnimator<W> {
        &self.segment
    }

    /// Get a mutable reference to the segment.
    pub fn segment_mut(&mut self) -> &mut SegmentAnimator<W> {
        &mut self.segment
    }
}
