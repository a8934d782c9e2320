//! Geometry primitives
//!
//! Data-only types shared by the constraint solvers: rectangles (with an
//! optional rotation angle), directed lines, and slope descriptors. No
//! solver logic lives here.

pub mod line;
pub mod rect;
pub mod slope;

pub use line::{Line, nearest_point_x, nearest_point_x_unclamped, nearest_point_y,
    nearest_point_y_unclamped};
pub use rect::Rect;
pub use slope::{Slope, SlopeDeform, SlopeDir};
