//! Tween and spring animations driven by externally supplied frame times.

#![allow(non_snake_case)]

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Trait for values that can participate in spring animations.
pub trait SpringScalar: Lerp + Copy {
    /// Convert the value to `f32` for physics calculations.
    fn to_f32(&self) -> f32;

    /// Progress of `current` along the `start..target` segment.
    ///
    /// A zero-length segment counts as finished.
    fn spring_progress(start: &Self, target: &Self, current: &Self) -> f32 {
        let span = target.to_f32() - start.to_f32();
        if span.abs() < f32::EPSILON {
            1.0
        } else {
            (current.to_f32() - start.to_f32()) / span
        }
    }

    fn is_near_target(current: &Self, target: &Self, threshold: f32) -> bool {
        (current.to_f32() - target.to_f32()).abs() < threshold
    }
}

impl SpringScalar for f32 {
    fn to_f32(&self) -> f32 {
        *self
    }
}

/// Easing curves for tween animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Jetpack Compose: LinearEasing
    LinearEasing,
    /// Jetpack Compose: FastOutSlowInEasing
    FastOutSlowInEasing,
    /// Jetpack Compose: LinearOutSlowInEasing
    LinearOutSlowInEasing,
    /// Jetpack Compose: FastOutLinearInEasing
    FastOutLinearInEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction.clamp(0.0, 1.0),
            Easing::FastOutSlowInEasing => CubicBezier::new(0.4, 0.0, 0.2, 1.0).solve(fraction),
            Easing::LinearOutSlowInEasing => CubicBezier::new(0.0, 0.0, 0.2, 1.0).solve(fraction),
            Easing::FastOutLinearInEasing => CubicBezier::new(0.4, 0.0, 1.0, 1.0).solve(fraction),
        }
    }
}

/// Unit cubic bezier anchored at (0, 0) and (1, 1), in polynomial form.
#[derive(Debug, Clone, Copy)]
struct CubicBezier {
    ax: f32,
    bx: f32,
    cx: f32,
    ay: f32,
    by: f32,
    cy: f32,
}

impl CubicBezier {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        Self {
            ax: 1.0 - cx - bx,
            bx,
            cx,
            ay: 1.0 - cy - by,
            by,
            cy,
        }
    }

    fn x_at(&self, t: f32) -> f32 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    fn y_at(&self, t: f32) -> f32 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    fn dx_at(&self, t: f32) -> f32 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    /// Solve for y given x, Newton first and bisection if Newton stalls.
    fn solve(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        let mut t = x;
        for _ in 0..8 {
            let err = self.x_at(t) - x;
            if err.abs() < 1e-6 {
                return self.y_at(t);
            }
            let slope = self.dx_at(t);
            if slope.abs() < 1e-6 {
                break;
            }
            t = (t - err / slope).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..32 {
            let sample = self.x_at(t);
            if (sample - x).abs() < 1e-6 {
                break;
            }
            if sample < x {
                lo = t;
            } else {
                hi = t;
            }
            t = 0.5 * (lo + hi);
        }
        self.y_at(t)
    }
}

/// Duration based animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// 1.0 = critically damped, < 1.0 = bouncy, > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Higher values settle faster.
    pub stiffness: f32,
    /// Velocity (progress units per second) below which the spring may rest.
    pub velocity_threshold: f32,
    /// Distance (value units) below which the spring may rest.
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 400.0,
            velocity_threshold: 0.01,
            position_threshold: 0.5,
        }
    }

    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness.max(f32::EPSILON);
        self
    }

    pub fn with_damping_ratio(mut self, damping_ratio: f32) -> Self {
        self.damping_ratio = damping_ratio.max(0.0);
        self
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    Tween(AnimationSpec),
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Spring(SpringSpec::default())
    }
}

/// Integration step for the spring solver, ~60fps.
const SPRING_TIMESTEP_SECONDS: f32 = 0.016;

/// A value that animates toward a target one frame at a time.
///
/// The animatable never reads a clock. The owner calls [`Animatable::on_frame`]
/// with monotonically increasing frame times; the first frame after
/// [`Animatable::animateTo`] only anchors the start time. Starting a new
/// animation or calling [`Animatable::stop`] mid-flight continues from the
/// current interpolated value, never from the previous target.
#[derive(Debug, Clone)]
pub struct Animatable<T: SpringScalar> {
    current: T,
    start: T,
    target: T,
    /// Spring velocity in progress units per second.
    velocity: f32,
    animation_type: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    running: bool,
}

impl<T: SpringScalar> Animatable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: initial,
            start: initial,
            target: initial,
            velocity: 0.0,
            animation_type: AnimationType::default(),
            start_time_nanos: None,
            last_frame_nanos: None,
            running: false,
        }
    }

    /// Animate from the current value to `target`.
    pub fn animateTo(&mut self, target: T, animation: AnimationType) {
        log::trace!(
            "animatable: {} -> {} ({:?})",
            self.current.to_f32(),
            target.to_f32(),
            animation
        );
        self.start = self.current;
        self.target = target;
        self.animation_type = animation;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.velocity = 0.0;
        self.running = true;
    }

    /// Jump to `target` and cancel any running animation.
    pub fn snapTo(&mut self, target: T) {
        self.current = target;
        self.settle();
    }

    /// Cancel the running animation, freezing it at its current value.
    ///
    /// Returns the value the animation was showing when it was interrupted.
    pub fn stop(&mut self) -> T {
        let value = self.current;
        if self.running {
            log::trace!(
                "animatable: interrupted at {} (target {})",
                value.to_f32(),
                self.target.to_f32()
            );
        }
        self.target = value;
        self.settle();
        value
    }

    pub fn value(&self) -> T {
        self.current
    }

    pub fn target(&self) -> T {
        self.target
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance the animation to `frame_time_nanos`.
    ///
    /// Returns `true` while another frame is needed.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        if !self.running {
            return false;
        }

        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        match self.animation_type {
            AnimationType::Tween(spec) => {
                let elapsed = frame_time_nanos.saturating_sub(start_time);
                let duration = (spec.duration_millis * 1_000_000).max(1);
                let linear = (elapsed as f32 / duration as f32).clamp(0.0, 1.0);
                self.current = self.start.lerp(&self.target, spec.easing.transform(linear));
                if linear >= 1.0 {
                    self.current = self.target;
                    self.settle();
                }
            }
            AnimationType::Spring(spec) => {
                let previous = self.last_frame_nanos.unwrap_or(start_time);
                let dt = frame_time_nanos.saturating_sub(previous) as f32 / 1_000_000_000.0;
                self.step_spring(spec, dt);

                let at_rest = self.velocity.abs() < spec.velocity_threshold;
                let near_target =
                    T::is_near_target(&self.current, &self.target, spec.position_threshold);
                if at_rest && near_target {
                    self.current = self.target;
                    self.settle();
                }
            }
        }
        self.last_frame_nanos = Some(frame_time_nanos);
        self.running
    }

    /// Semi-implicit Euler over `dt` seconds, in fixed sub-steps.
    fn step_spring(&mut self, spec: SpringSpec, dt: f32) {
        let stiffness = spec.stiffness;
        let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();
        let mut elapsed = 0.0f32;
        while elapsed < dt {
            let step = SPRING_TIMESTEP_SECONDS.min(dt - elapsed);
            let progress = T::spring_progress(&self.start, &self.target, &self.current);
            // Target sits at progress 1.0.
            let force = -stiffness * (progress - 1.0) - damping * self.velocity;
            self.velocity += force * step;
            let next = (progress + self.velocity * step).clamp(-1.0, 2.0);
            self.current = self.start.lerp(&self.target, next);
            elapsed += step;
        }
    }

    fn settle(&mut self) {
        self.start = self.current;
        self.target = self.current;
        self.velocity = 0.0;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.running = false;
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
