//! Assertion utilities for robot testing

use crate::recording_surface::RecordingSurface;

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that the surface never received a negative offset.
pub fn assert_offsets_non_negative(surface: &RecordingSurface, msg: &str) {
    let offsets = surface.offsets();
    assert!(
        offsets.iter().all(|offset| *offset >= 0.0),
        "{}: negative offset in {:?}",
        msg,
        offsets
    );
}

/// Assert that recorded offsets move toward `target` without crossing it,
/// within `tolerance`.
pub fn assert_monotonic_toward(offsets: &[f32], target: f32, tolerance: f32, msg: &str) {
    for pair in offsets.windows(2) {
        let before = pair[0] - target;
        let after = pair[1] - target;
        let crossed = before.signum() != after.signum() && after.abs() > tolerance;
        assert!(
            !crossed && after.abs() <= before.abs() + tolerance,
            "{}: moved away from {} ({} -> {}) in {:?}",
            msg,
            target,
            pair[0],
            pair[1],
            offsets
        );
    }
}
