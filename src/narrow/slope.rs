//! Rectangle vs slope constraint resolution
//!
//! The slope's hypotenuse becomes an implicit half-plane through two
//! corners of its working area, with the normal pointing out of the solid.
//! Only the one mover corner nearest the hypotenuse is tested; when that
//! corner has slid past the working area's footprint the plane stops being
//! representative and the solver resolves against the box instead.

use glam::Vec2;

use super::Constraints;
use super::rect_rect::aligned_rect_vs_rect;
use crate::consts::{FOOTPRINT_SLACK, SLOPE_SKIN};
use crate::geom::{Rect, Slope, SlopeDir};

/// An implicit oriented line: points with negative signed distance are
/// inside the solid.
struct Plane {
    normal: Vec2,
    offset: f32,
}

impl Plane {
    /// Half-plane through `p1` and `p2`. The unit normal points to the
    /// left of the p1-to-p2 direction, so the caller picks the corner
    /// order to orient the solid side.
    fn through(p1: Vec2, p2: Vec2) -> Self {
        let normal = Vec2::new(p2.y - p1.y, p1.x - p2.x);
        let offset = -p2.dot(normal);
        let length = normal.length();
        Self { normal: normal / length, offset: offset / length }
    }

    /// Penetration depth of `point` into the solid side; negative when the
    /// point is on the free side.
    fn depth(&self, point: Vec2) -> f32 {
        -self.normal.dot(point) - self.offset
    }
}

/// A successful slope contact.
#[derive(Debug, Clone, PartialEq)]
pub struct SlopeContact {
    pub constraints: Constraints,
    /// True when the hypotenuse pressed the mover's bottom; callers use
    /// this as the "standing on the slope" signal. The footprint fallback
    /// never sets it, even when it constrains the bottom.
    pub on_bottom: bool,
}

/// Resolve a rectangle against a slope.
///
/// Returns `None` when the boxes don't overlap or the relevant corner is
/// on the free side of the hypotenuse. `rect` must be axis-aligned; slopes
/// don't support rotated movers.
pub fn rect_vs_slope(rect: &Rect, slope: &Slope) -> Option<SlopeContact> {
    debug_assert!(!rect.is_rotated());

    if !rect.overlaps(&slope.bbox) {
        return None;
    }

    let area = slope.working_area();

    // The corner nearest the hypotenuse, and the plane oriented so the
    // solid side is behind it.
    let (corner, plane) = match slope.dir {
        SlopeDir::Southwest => (
            Vec2::new(rect.left(), rect.bottom()),
            Plane::through(area.pos, area.p2()),
        ),
        SlopeDir::Northeast => (
            Vec2::new(rect.right(), rect.top()),
            Plane::through(area.p2(), area.pos),
        ),
        SlopeDir::Southeast => (
            rect.p2(),
            Plane::through(
                Vec2::new(area.left(), area.bottom()),
                Vec2::new(area.right(), area.top()),
            ),
        ),
        SlopeDir::Northwest => (
            rect.pos,
            Plane::through(
                Vec2::new(area.right(), area.top()),
                Vec2::new(area.left(), area.bottom()),
            ),
        ),
    };

    let depth = plane.depth(corner);
    if depth < 0.0 {
        return None;
    }

    let mut contact = SlopeContact { constraints: Constraints::new(), on_bottom: false };

    if corner.x < area.left() - FOOTPRINT_SLACK
        || corner.x > area.right() + FOOTPRINT_SLACK
        || corner.y < area.top() - FOOTPRINT_SLACK
        || corner.y > area.bottom() + FOOTPRINT_SLACK
    {
        // The corner slid past the triangle's footprint; the hypotenuse
        // plane no longer describes the surface there.
        log::trace!("slope corner outside working area, resolving against box");
        contact.constraints = aligned_rect_vs_rect(rect, &area);
    } else {
        let outvec = plane.normal * (depth + SLOPE_SKIN);
        let constraints = &mut contact.constraints;

        if outvec.x < 0.0 {
            constraints.constrain_right(rect.right() + outvec.x);
            constraints.hit.right = true;
        } else {
            constraints.constrain_left(rect.left() + outvec.x);
            constraints.hit.left = true;
        }

        if outvec.y < 0.0 {
            constraints.constrain_bottom(rect.bottom() + outvec.y);
            constraints.hit.bottom = true;
            contact.on_bottom = true;
        } else {
            constraints.constrain_top(rect.top() + outvec.y);
            constraints.hit.top = true;
        }

        constraints.hit.slope_normal = plane.normal;
    }

    Some(contact)
}
