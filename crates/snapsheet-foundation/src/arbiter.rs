//! Ownership of a new drag between the sheet and its scroll content.
//!
//! The sheet only takes a drag when the content cannot absorb it: the content
//! must sit at its top anchor, and the drag must either pull the sheet down or
//! push a not-yet-fully-open sheet up. Every new gesture is arbitrated again; no
//! decision is cached.

use crate::scroll::ScrollContext;
use snapsheet_ui_graphics::Vector;

/// Delegate consulted when a sheet drag is about to begin.
pub trait GestureArbiter {
    /// Returns `true` to let the sheet drag proceed, `false` to leave the
    /// interaction to the scroll content.
    ///
    /// `offset` is the sheet's current offset, `0` being fully open.
    fn should_begin(&self, candidate_velocity: Vector, scroll: ScrollContext, offset: f32) -> bool;
}

/// Default arbitration between a vertical sheet drag and nested scrolling.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NestedScrollArbiter;

impl NestedScrollArbiter {
    pub fn new() -> Self {
        Self
    }
}

impl GestureArbiter for NestedScrollArbiter {
    fn should_begin(&self, candidate_velocity: Vector, scroll: ScrollContext, offset: f32) -> bool {
        let admit = if scroll.content_offset_y > 0.0 {
            false
        } else if candidate_velocity.dy > 0.0 {
            true
        } else {
            offset != 0.0
        };
        log::debug!(
            "arbiter: {} (content_offset_y={}, velocity_y={}, offset={})",
            if admit { "admit" } else { "reject" },
            scroll.content_offset_y,
            candidate_velocity.dy,
            offset
        );
        admit
    }
}

impl<F> GestureArbiter for F
where
    F: Fn(Vector, ScrollContext, f32) -> bool,
{
    fn should_begin(&self, candidate_velocity: Vector, scroll: ScrollContext, offset: f32) -> bool {
        self(candidate_velocity, scroll, offset)
    }
}
