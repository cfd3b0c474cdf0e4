//! Release velocity estimation from recent pointer history.

use crate::gesture_constants::{MAX_FLING_VELOCITY, VELOCITY_HISTORY_LIMIT_NANOS};
use smallvec::SmallVec;
use snapsheet_ui_graphics::{Point, Vector};

#[derive(Debug, Clone, Copy)]
struct Sample {
    position: Point,
    uptime_nanos: u64,
}

/// Estimates pointer velocity over a short trailing window.
///
/// Velocity is the displacement between the oldest and newest sample inside
/// the window divided by their time difference, clamped per axis to
/// [`MAX_FLING_VELOCITY`].
#[derive(Debug, Default, Clone)]
pub struct VelocityTracker {
    history: SmallVec<[Sample; 16]>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_position(&mut self, uptime_nanos: u64, position: Point) {
        if let Some(last) = self.history.last() {
            if uptime_nanos < last.uptime_nanos {
                log::trace!(
                    "velocity tracker: ignoring sample at {uptime_nanos} earlier than {}",
                    last.uptime_nanos
                );
                return;
            }
        }
        self.history.push(Sample {
            position,
            uptime_nanos,
        });
        self.trim(uptime_nanos);
    }

    pub fn velocity(&self) -> Vector {
        let (Some(first), Some(last)) = (self.history.first(), self.history.last()) else {
            return Vector::ZERO;
        };
        let elapsed = last.uptime_nanos.saturating_sub(first.uptime_nanos);
        if elapsed == 0 {
            return Vector::ZERO;
        }
        let seconds = elapsed as f32 / 1_000_000_000.0;
        (last.position - first.position)
            .scale(1.0 / seconds)
            .clamp_components(MAX_FLING_VELOCITY)
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }

    fn trim(&mut self, now: u64) {
        self.history
            .retain(|sample| sample.uptime_nanos + VELOCITY_HISTORY_LIMIT_NANOS >= now);
    }
}
