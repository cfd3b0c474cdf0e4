//! Snap decisions taken when a drag is released.

use crate::position::SnapState;
use snapsheet_animation::{FloatDecayAnimationSpec, SplineBasedDecaySpec};

/// Chooses the resting state for a released sheet.
pub trait SnapPolicy {
    /// `sheet_position` is the committed offset plus the drag translation,
    /// `velocity_y` the release velocity (positive = downwards).
    fn resolve(&self, sheet_position: f32, velocity_y: f32, screen_height: f32) -> SnapState;
}

/// Quarter-screen thresholds. Velocity does not take part in the decision.
///
/// With `quarter = h / 4` and `three_quarters = 3 * quarter`, checked in order:
/// strictly between the two is `Half`, below `three_quarters` is `Open`,
/// anything else is `Closed`. Positions exactly on a threshold therefore fall
/// to `Open` (at `quarter`) or `Closed` (at `three_quarters`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThresholdSnapPolicy;

impl SnapPolicy for ThresholdSnapPolicy {
    fn resolve(&self, sheet_position: f32, _velocity_y: f32, screen_height: f32) -> SnapState {
        let quarter = screen_height / 4.0;
        let three_quarters = quarter * 3.0;

        if quarter < sheet_position && sheet_position < three_quarters {
            SnapState::Half
        } else if sheet_position < three_quarters {
            SnapState::Open
        } else {
            SnapState::Closed
        }
    }
}

/// Velocity-aware snapping: a fast release is projected along a fling decay
/// before the quarter thresholds are applied, so a flick can skip a state.
///
/// Releases slower than `min_fling_velocity` resolve exactly like
/// [`ThresholdSnapPolicy`].
#[derive(Clone, Copy, Debug)]
pub struct FlingSnapPolicy {
    decay: SplineBasedDecaySpec,
    min_fling_velocity: f32,
}

impl FlingSnapPolicy {
    /// Release speed below which velocity is ignored, in px/s.
    pub const DEFAULT_MIN_FLING_VELOCITY: f32 = 400.0;

    pub fn new(density: f32) -> Self {
        Self {
            decay: SplineBasedDecaySpec::new(density),
            min_fling_velocity: Self::DEFAULT_MIN_FLING_VELOCITY,
        }
    }

    pub fn with_min_fling_velocity(mut self, min_fling_velocity: f32) -> Self {
        self.min_fling_velocity = min_fling_velocity.abs();
        self
    }

    /// Where the sheet would come to rest if it kept its release momentum.
    pub fn projected_position(&self, sheet_position: f32, velocity_y: f32) -> f32 {
        if velocity_y.abs() < self.min_fling_velocity {
            sheet_position
        } else {
            self.decay.get_target_value(sheet_position, velocity_y)
        }
    }
}

impl Default for FlingSnapPolicy {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl SnapPolicy for FlingSnapPolicy {
    fn resolve(&self, sheet_position: f32, velocity_y: f32, screen_height: f32) -> SnapState {
        let projected = self.projected_position(sheet_position, velocity_y);
        ThresholdSnapPolicy.resolve(projected, velocity_y, screen_height)
    }
}

impl<F> SnapPolicy for F
where
    F: Fn(f32, f32, f32) -> SnapState,
{
    fn resolve(&self, sheet_position: f32, velocity_y: f32, screen_height: f32) -> SnapState {
        self(sheet_position, velocity_y, screen_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_policy_ignores_velocity() {
        for velocity in [-8000.0, 0.0, 8000.0] {
            assert_eq!(ThresholdSnapPolicy.resolve(300.0, velocity, 800.0), SnapState::Half);
            assert_eq!(ThresholdSnapPolicy.resolve(100.0, velocity, 800.0), SnapState::Open);
            assert_eq!(ThresholdSnapPolicy.resolve(700.0, velocity, 800.0), SnapState::Closed);
        }
    }

    #[test]
    fn slow_release_matches_thresholds() {
        let policy = FlingSnapPolicy::default();
        assert_eq!(policy.resolve(300.0, 100.0, 1000.0), SnapState::Half);
        assert_eq!(policy.projected_position(300.0, -399.0), 300.0);
    }

    #[test]
    fn fast_flick_skips_to_the_far_state() {
        let policy = FlingSnapPolicy::default();
        assert_eq!(policy.resolve(300.0, 5000.0, 1000.0), SnapState::Closed);
        assert_eq!(policy.resolve(700.0, -5000.0, 1000.0), SnapState::Open);
    }

    #[test]
    fn closures_are_policies() {
        let always_open = |_: f32, _: f32, _: f32| SnapState::Open;
        assert_eq!(always_open.resolve(900.0, 0.0, 1000.0), SnapState::Open);
    }
}
