//! Cycle counter sampling

use crate::hal::Hal;

/// An in-progress measurement started by [`CycleSpan::begin`].
///
/// The counter is assumed monotonic for the duration of one operation. The
/// elapsed count is the wrapping difference of the two samples, so a counter
/// that wraps more than once while the operation runs yields a wrong value.
#[derive(Clone, Copy, Debug)]
#[must_use = "a span measures nothing until `end` is called"]
pub struct CycleSpan {
    start: u64,
}

impl CycleSpan {
    /// Sample the counter immediately before the operation under test.
    #[inline(always)]
    pub fn begin<H: Hal + ?Sized>(hal: &H) -> Self {
        Self {
            start: hal.get_time(),
        }
    }

    /// Sample the counter immediately after the operation under test and
    /// return the elapsed cycles.
    #[inline(always)]
    pub fn end<H: Hal + ?Sized>(self, hal: &H) -> u64 {
        elapsed(self.start, hal.get_time())
    }
}

/// Cycles between two samples of the counter.
#[inline(always)]
pub const fn elapsed(start: u64, end: u64) -> u64 {
    end.wrapping_sub(start)
}
