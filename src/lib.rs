//! Narrow-phase collision constraints for tile-grid 2D games
//!
//! Core modules:
//! - `geom`: Geometry primitives (rectangles with optional rotation,
//!   directed lines, slope descriptors)
//! - `narrow`: Constraint solvers (rect/rect, rotated rect/rect,
//!   rect/slope) and segment intersection predicates
//!
//! Everything here is pure and deterministic: each solver is a plain
//! function of its inputs that returns a fresh [`Constraints`] value. The
//! surrounding physics loop calls one solver per (mover, obstacle) pair per
//! tick, merges the results with [`Constraints::merge`], and clamps the
//! mover's tentative position to the intersection of all bounds.
//!
//! Coordinates are screen space: y grows downward, so "top" is the smaller
//! y. Rotation angles are in degrees about a rectangle's center.

pub mod geom;
pub mod narrow;

pub use geom::{Line, Rect, Slope, SlopeDeform, SlopeDir};
pub use narrow::{
    Constraints, Hit, SlopeContact, aligned_rect_vs_rect, rect_intersects_segment, rect_vs_rect,
    rect_vs_slope, rotated_rect_vs_rect, segment_intersects_segment,
};

use glam::Vec2;

/// Solver tuning constants
pub mod consts {
    /// Extra distance (world units) added to slope push-out vectors so a
    /// resolved mover never lands exactly on the hypotenuse and re-collides
    /// on the next tick.
    pub const SLOPE_SKIN: f32 = 0.2;
    /// How far (world units) a mover corner may slide past a slope's
    /// working-area box before the hypotenuse plane stops being
    /// representative and the solver resolves against the box instead.
    pub const FOOTPRINT_SLACK: f32 = 3.0;
    /// Skin margin (world units) for rotated-rectangle resolution; keeps
    /// resolved positions just off the exact contact line.
    pub const CONTACT_SHIFT: f32 = 0.0051;
    /// Tolerance (degrees) when testing whether a rotation angle is a
    /// multiple of 90 or 180.
    pub const ANGLE_EPSILON: f32 = 0.002;
    /// Tolerance (world units) when testing whether a rectangle is square.
    pub const SIZE_EPSILON: f32 = 0.002;
}

/// Rotate `v` by `angle` degrees about the origin.
#[inline]
pub fn rotate_deg(v: Vec2, angle: f32) -> Vec2 {
    let theta = angle.to_radians();
    let (sin, cos) = theta.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_deg_quarter_turn() {
        let v = rotate_deg(Vec2::new(1.0, 0.0), 90.0);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotate_deg_negative_angle() {
        let v = rotate_deg(Vec2::new(0.0, 1.0), -90.0);
        assert!((v.x - 1.0).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);
    }
}
