pub mod drag;

pub use drag::{DragGestureDetector, DragUpdate};
