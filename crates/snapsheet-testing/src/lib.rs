//! Testing utilities and harness for snapsheet

pub mod recording_surface;
pub mod robot;
pub mod robot_assertions;

pub use recording_surface::{RecordingSurface, SurfaceEvent};
pub use robot::*;
pub use robot_assertions::*;

pub mod prelude {
    pub use crate::recording_surface::{RecordingSurface, SurfaceEvent};
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
