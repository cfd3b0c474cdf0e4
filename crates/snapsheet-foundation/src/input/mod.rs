pub mod gestures;
pub mod types;
pub mod velocity_tracker;

pub use types::{DragSample, GestureState, PointerEvent, PointerEventKind, PointerId};
pub use velocity_tracker::VelocityTracker;
