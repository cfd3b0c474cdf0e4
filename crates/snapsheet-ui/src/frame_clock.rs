//! Frame timestamps for hosts without a vsync clock of their own.

use web_time::Instant;

/// Monotonic nanosecond clock anchored at creation.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    origin: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Nanoseconds since the clock was created, suitable for
    /// [`BottomSheet::advance_frame`](crate::BottomSheet::advance_frame).
    pub fn now_nanos(&self) -> u64 {
        self.nanos_at(Instant::now())
    }

    pub fn nanos_at(&self, instant: Instant) -> u64 {
        let elapsed = instant.saturating_duration_since(self.origin);
        u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
