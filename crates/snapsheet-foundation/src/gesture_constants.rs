//! Shared gesture constants for touch/pointer handling.
//!
//! Values are in logical pixels (and logical pixels per second).

/// Touch slop: distance a pointer must travel from its press position before
/// a drag begins. Below it the interaction is still a potential tap.
///
/// Matches Android's `ViewConfiguration.TOUCH_SLOP` of ~8dp at baseline
/// density.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Maximum fling velocity reported by the velocity tracker, per axis.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Window of pointer history used to estimate release velocity.
pub const VELOCITY_HISTORY_LIMIT_NANOS: u64 = 100_000_000;
