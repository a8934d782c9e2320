//! Narrow-phase constraint solvers
//!
//! Each solver is a pure function of a (mover, obstacle) pair that returns
//! a fresh [`Constraints`] value; the caller merges results across all
//! obstacles touched this tick. The solvers assume the broad phase already
//! confirmed the pair's bounding boxes overlap; only the slope solver
//! re-checks, because its boolean result doubles as the caller's "standing
//! on a slope" signal.

pub mod constraints;
pub mod rect_rect;
pub mod rotated;
pub mod segment;
pub mod slope;

pub use constraints::{Constraints, Hit};
pub use rect_rect::{aligned_rect_vs_rect, rect_vs_rect};
pub use rotated::rotated_rect_vs_rect;
pub use segment::{rect_intersects_segment, segment_intersects_segment};
pub use slope::{SlopeContact, rect_vs_slope};
