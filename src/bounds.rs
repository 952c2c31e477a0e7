/// Inclusive pixel range of a segment on the strip
///
/// `start <= end` is expected. A reversed range is not rejected; it
/// covers no pixels and renders nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentBounds {
    pub start: usize,
    pub end: usize,
}

impl SegmentBounds {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Distance between the first and the last pixel
    pub const fn span(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Get the number of LEDs in the segment
    pub const fn count(self) -> usize {
        if self.is_inverted() { 0 } else { self.span() + 1 }
    }

    /// Returns true if `end` lies before `start`
    pub const fn is_inverted(self) -> bool {
        self.end < self.start
    }

    /// Returns true if the segment covers exactly one pixel
    pub const fn is_single(self) -> bool {
        self.count() == 1
    }
}
