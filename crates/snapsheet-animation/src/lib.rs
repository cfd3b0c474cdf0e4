//! Animation system for snapsheet
//!
//! Provides frame-driven animations with easing curves, spring physics and
//! spline-based fling decay. Animations never own a clock: the host pushes
//! frame timestamps in with [`Animatable::on_frame`].
//!
//! Note: `Animatable` keeps the camelCase method names (`animateTo`, `snapTo`)
//! used across the rest of the Compose-style API surface.

mod animation;
mod decay_spec;

pub use animation::*;
pub use decay_spec::*;
