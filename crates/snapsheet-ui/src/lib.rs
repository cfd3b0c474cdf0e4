//! Bottom sheet built on snapsheet's gesture foundation.
//!
//! - [`DraggableScrollSheet`] is the reusable control: it recognises drags,
//!   arbitrates them against the inner scroll content and reports the sheet's
//!   drags through [`DragHooks`].
//! - [`PositionResolver`] turns drag samples into a live offset and, on
//!   release, into a [`SnapState`].
//! - [`BottomSheet`] wires both together, animates snaps with a spring and
//!   feeds offsets to a [`SheetSurface`].

mod draggable;
mod frame_clock;
mod hooks;
mod position;
mod sheet;
mod snap_policy;
mod surface;

pub use draggable::{DragOwner, DraggableScrollSheet};
pub use frame_clock::FrameClock;
pub use hooks::{DragCallback, DragHooks};
pub use position::{PositionResolver, SheetPosition, SnapState};
pub use sheet::{BottomSheet, SheetConfig};
pub use snap_policy::{FlingSnapPolicy, SnapPolicy, ThresholdSnapPolicy};
pub use surface::{NullSurface, SheetSurface};

pub use snapsheet_animation::{AnimationSpec, AnimationType, Easing, SpringSpec};
pub use snapsheet_foundation::{
    DragSample, GestureArbiter, GestureState, NestedScrollArbiter, PointerEvent,
    PointerEventKind, ScrollContext, ScrollContextProvider, ScrollState,
};
pub use snapsheet_ui_graphics::{Point, Size, Vector};

pub mod prelude {
    pub use crate::{
        BottomSheet, DragHooks, DraggableScrollSheet, SheetConfig, SheetSurface, SnapState,
    };
    pub use snapsheet_foundation::prelude::*;
    pub use snapsheet_ui_graphics::prelude::*;
}
