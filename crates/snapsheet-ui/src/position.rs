//! Live offset and release resolution for the sheet.
//!
//! Offsets grow downwards: `0` is fully open, `screen_height` fully closed.

use crate::snap_policy::{SnapPolicy, ThresholdSnapPolicy};
use snapsheet_foundation::DragSample;

/// Resting positions of the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SnapState {
    Open,
    #[default]
    Half,
    Closed,
}

impl SnapState {
    /// Committed offset of this state for a screen of `screen_height`.
    pub fn offset(self, screen_height: f32) -> f32 {
        let screen_height = sanitize_screen_height(screen_height);
        match self {
            SnapState::Open => 0.0,
            SnapState::Half => screen_height / 2.0,
            SnapState::Closed => screen_height,
        }
    }
}

/// Continuous offset of the sheet plus its last resolved snap state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetPosition {
    pub current_offset: f32,
    pub snap_state: SnapState,
}

/// Pure functions mapping drag samples to sheet offsets.
#[derive(Clone, Copy, Debug, Default)]
pub struct PositionResolver;

impl PositionResolver {
    /// Live offset for a `Changed` sample: `max(committed + translation.y, 0)`.
    pub fn on_changed(sample: &DragSample, committed_offset: f32) -> f32 {
        (committed_offset + translation_y(sample)).max(0.0)
    }

    /// Resolves a released drag with the default threshold policy.
    ///
    /// Returns the new committed offset and the snap state it belongs to.
    pub fn on_ended(
        sample: &DragSample,
        committed_offset: f32,
        screen_height: f32,
    ) -> (f32, SnapState) {
        Self::on_ended_with(&ThresholdSnapPolicy, sample, committed_offset, screen_height)
    }

    pub fn on_ended_with(
        policy: &dyn SnapPolicy,
        sample: &DragSample,
        committed_offset: f32,
        screen_height: f32,
    ) -> (f32, SnapState) {
        let screen_height = sanitize_screen_height(screen_height);
        let sheet_position = committed_offset + translation_y(sample);
        let velocity_y = if sample.velocity.dy.is_finite() {
            sample.velocity.dy
        } else {
            0.0
        };
        let state = policy.resolve(sheet_position, velocity_y, screen_height);
        log::debug!(
            "resolver: release at {sheet_position} (velocity {velocity_y}) -> {state:?}"
        );
        (state.offset(screen_height), state)
    }
}

fn translation_y(sample: &DragSample) -> f32 {
    let dy = sample.translation.dy;
    if dy.is_finite() {
        dy
    } else {
        log::warn!("resolver: non-finite translation {dy}, treating as 0");
        0.0
    }
}

/// Negative or non-finite heights are caller errors; clamp them to `0`.
pub(crate) fn sanitize_screen_height(screen_height: f32) -> f32 {
    if screen_height.is_finite() && screen_height >= 0.0 {
        screen_height
    } else {
        log::warn!("resolver: invalid screen height {screen_height}, clamping to 0");
        0.0
    }
}

#[cfg(test)]
#[path = "tests/position_tests.rs"]
mod tests;
