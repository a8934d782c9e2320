//! Segment intersection predicates
//!
//! Pure tests used by gameplay code for line-of-sight and projectile-path
//! checks against static rectangles; the constraint solvers don't call
//! these.

use glam::Vec2;

use crate::geom::Rect;

/// Whether segments `p1`-`p2` and `q1`-`q2` intersect.
///
/// Signed-area test, normalized so the main determinant is non-negative.
/// Collinear segments intersect iff their 1D extents overlap along a
/// non-degenerate axis.
pub fn segment_intersects_segment(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> bool {
    let (mut a1, mut b1, mut a2, mut b2) = (p1.x, p1.y, p2.x, p2.y);
    let (mut c1, mut d1, mut c2, mut d2) = (q1.x, q1.y, q2.x, q2.y);

    let mut num = (b2 - b1) * (c2 - c1) - (a2 - a1) * (d2 - d1);
    let mut den1 = (d2 - b2) * (c1 - c2) + (a2 - c2) * (d1 - d2);
    let mut den2 = (d2 - b2) * (a1 - a2) + (a2 - c2) * (b1 - b2);

    if num < 0.0 {
        num = -num;
        den1 = -den1;
        den2 = -den2;
    }

    if num == 0.0 {
        // Parallel. Distinct parallel lines never intersect.
        if (b1 - b2) * (c1 - a2) != (a1 - a2) * (d1 - b2) {
            return false;
        }
        // Collinear: overlap along whichever axis the segments aren't
        // degenerate in.
        if a1 == a2 {
            std::mem::swap(&mut a1, &mut b1);
            std::mem::swap(&mut a2, &mut b2);
            std::mem::swap(&mut c1, &mut d1);
            std::mem::swap(&mut c2, &mut d2);
        }
        if a1 > a2 {
            std::mem::swap(&mut a1, &mut a2);
        }
        if c1 > c2 {
            std::mem::swap(&mut c1, &mut c2);
        }
        return a1 <= c2 && a2 >= c1;
    }

    den1 >= 0.0 && den1 <= num && den2 >= 0.0 && den2 <= num
}

/// Whether the segment crosses any of the rectangle's four edges.
///
/// Uses the rectangle's actual (possibly rotated) corners. A segment
/// strictly inside the rectangle crosses no edge and reports false;
/// combine with [`Rect::contains_point`] when containment matters.
pub fn rect_intersects_segment(rect: &Rect, start: Vec2, end: Vec2) -> bool {
    let [tl, tr, bl, br] = rect.corners();

    segment_intersects_segment(tl, tr, start, end)
        || segment_intersects_segment(tr, br, start, end)
        || segment_intersects_segment(br, bl, start, end)
        || segment_intersects_segment(bl, tl, start, end)
}
