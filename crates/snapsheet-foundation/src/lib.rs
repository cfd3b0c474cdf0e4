//! Gesture plumbing for snapsheet.
//!
//! Turns raw pointer events into drag samples, tracks the inner scroll
//! surface, and decides which of the two owns a new drag.

pub mod arbiter;
pub mod gesture_constants;
pub mod input;
pub mod scroll;

pub use arbiter::{GestureArbiter, NestedScrollArbiter};
pub use gesture_constants::*;
pub use input::gestures::{DragGestureDetector, DragUpdate};
pub use input::{
    DragSample, GestureState, PointerEvent, PointerEventKind, PointerId, VelocityTracker,
};
pub use scroll::{ScrollContext, ScrollContextProvider, ScrollState};

pub mod prelude {
    pub use crate::arbiter::{GestureArbiter, NestedScrollArbiter};
    pub use crate::input::{DragSample, GestureState, PointerEvent, PointerEventKind};
    pub use crate::scroll::{ScrollContext, ScrollContextProvider, ScrollState};
}
