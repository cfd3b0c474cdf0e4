//! Fling decay physics.
//!
//! Spline-based deceleration in the manner of Android's `Scroller`, used to
//! project where a released drag would come to rest.

const INFLECTION: f32 = 0.35;
const GRAVITY_EARTH: f32 = 9.80665;
const INCHES_PER_METER: f32 = 39.37;
/// `ln(0.78) / ln(0.9)`
const DECELERATION_RATE: f32 = 2.358_201_6;

fn physical_coefficient(friction: f32, density: f32) -> f32 {
    GRAVITY_EARTH * INCHES_PER_METER * density * 160.0 * friction
}

/// Computes how far a fling travels from its release velocity.
#[derive(Debug, Clone, Copy)]
pub struct FlingCalculator {
    friction: f32,
    magic_physical_coefficient: f32,
}

impl FlingCalculator {
    pub const DEFAULT_FRICTION: f32 = 0.015;

    /// `density` is the screen density factor (1.0 for mdpi, 2.0 for xhdpi).
    pub fn new(friction: f32, density: f32) -> Self {
        Self {
            friction,
            magic_physical_coefficient: physical_coefficient(0.84, density),
        }
    }

    pub fn with_density(density: f32) -> Self {
        Self::new(Self::DEFAULT_FRICTION, density)
    }

    fn spline_deceleration(&self, velocity: f32) -> f64 {
        let friction = self.friction * self.magic_physical_coefficient;
        (INFLECTION as f64 * velocity.abs() as f64 / friction as f64).ln()
    }

    /// Unsigned distance travelled before the fling stops.
    pub fn fling_distance(&self, velocity: f32) -> f32 {
        if velocity == 0.0 {
            return 0.0;
        }
        let l = self.spline_deceleration(velocity);
        let rate = DECELERATION_RATE as f64;
        self.friction * self.magic_physical_coefficient * (rate / (rate - 1.0) * l).exp() as f32
    }
}

/// A decay animation has no target of its own: it starts with a velocity and
/// slows down to rest.
pub trait FloatDecayAnimationSpec {
    /// Value at which the decay comes to rest.
    fn get_target_value(&self, initial_value: f32, initial_velocity: f32) -> f32;
}

#[derive(Debug, Clone, Copy)]
pub struct SplineBasedDecaySpec {
    calculator: FlingCalculator,
}

impl SplineBasedDecaySpec {
    pub fn new(density: f32) -> Self {
        Self {
            calculator: FlingCalculator::with_density(density),
        }
    }
}

impl FloatDecayAnimationSpec for SplineBasedDecaySpec {
    fn get_target_value(&self, initial_value: f32, initial_velocity: f32) -> f32 {
        initial_value + self.calculator.fling_distance(initial_velocity) * initial_velocity.signum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faster_flings_travel_further() {
        let calc = FlingCalculator::with_density(2.0);
        assert!(calc.fling_distance(5000.0) > 0.0);
        assert!(calc.fling_distance(10_000.0) > calc.fling_distance(5000.0));
        assert_eq!(calc.fling_distance(-5000.0), calc.fling_distance(5000.0));
    }

    #[test]
    fn target_follows_velocity_sign() {
        let spec = SplineBasedDecaySpec::new(1.0);
        assert!(spec.get_target_value(100.0, 3000.0) > 100.0);
        assert!(spec.get_target_value(100.0, -3000.0) < 100.0);
        assert_eq!(spec.get_target_value(100.0, 0.0), 100.0);
    }
}
