//! Pure math/data for snapsheet
//!
//! Geometry primitives shared by the gesture, animation and sheet crates.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Size, Vector};
}
