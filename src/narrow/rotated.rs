//! Rotated rectangle vs rectangle constraint resolution
//!
//! The obstacle's rotation is discretized into four silhouette shapes so
//! that "which corner is nearest" and "which direction is safe to push out
//! along" reduce to comparisons against sorted corner lists instead of a
//! general separating-axis solve. The solver runs a horizontal approach
//! phase, then a vertical one, and only falls back to a center-based
//! minimum-penetration push when neither phase matches.

use glam::Vec2;

use super::Constraints;
use crate::consts::CONTACT_SHIFT;
use crate::geom::{
    Rect, nearest_point_x, nearest_point_x_unclamped, nearest_point_y, nearest_point_y_unclamped,
};

/// The obstacle's silhouette, from its rotation reduced modulo 180 degrees
/// and its aspect ratio.
///
/// ```text
/// RHOMBUS:    / \        FACING_LEFT:  ________       FACING_RIGHT:   ________
///           /     \                    \       \                     /       /
///         /         \                   \       \                   /       /
///         \         /                    \       \                 /       /
///           \     /                       \       \               /       /
///             \ /                          \_______\             /_______/
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Silhouette {
    /// Axis-aligned, or rotated a clean quarter turn.
    None,
    /// A square at 45 or 135 degrees.
    Rhombus,
    FacingLeft,
    FacingRight,
}

fn classify(rect: &Rect) -> Silhouette {
    if !rect.is_rotated() {
        return Silhouette::None;
    }

    // Angles are authored constants, so exact comparisons against the
    // quarter- and eighth-turn marks are intentional.
    let rotation = rect.angle.rem_euclid(180.0);
    let square = rect.is_square();

    if rotation == 90.0 {
        Silhouette::None
    } else if square && (rotation == 45.0 || rotation == 135.0) {
        Silhouette::Rhombus
    } else if (square && (rotation < 45.0 || (rotation > 90.0 && rotation < 135.0)))
        || (rect.width() < rect.height() && rotation <= 90.0)
        || (rect.width() > rect.height() && rotation > 90.0)
    {
        Silhouette::FacingRight
    } else {
        Silhouette::FacingLeft
    }
}

/// A corner found by a scan, plus where it projects onto the edge.
#[derive(Debug, Clone, Copy)]
struct NearestCorner {
    corner: Vec2,
    point: f32,
}

impl NearestCorner {
    fn distance_x(&self) -> f32 {
        (self.point - self.corner.x).abs()
    }

    fn distance_y(&self) -> f32 {
        (self.point - self.corner.y).abs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HorizontalSide {
    Left,
    Right,
}

/// Scan `corners` (sorted ascending by x) for the first whose horizontal
/// cast onto edge `a`-`b` lands on the bounding side named by `side`. The
/// scan starts from the left end for `Left` and the right end for `Right`.
fn nearest_corner_x(
    a: Vec2,
    b: Vec2,
    corners: &[Vec2; 4],
    side: HorizontalSide,
) -> NearestCorner {
    let mut order = [0, 1, 2, 3];
    if side == HorizontalSide::Right {
        order.reverse();
    }

    for i in order {
        let corner = corners[i];
        let point = nearest_point_x_unclamped(a, b, corner);
        let bounded = match side {
            HorizontalSide::Left => corner.x <= point,
            HorizontalSide::Right => corner.x >= point,
        };
        if bounded {
            return NearestCorner { corner, point };
        }
    }

    NearestCorner { corner: corners[0], point: nearest_point_x(a, b, corners[0]) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VerticalSide {
    Top,
    Bottom,
}

/// Vertical counterpart of [`nearest_corner_x`], scanning corners sorted
/// ascending by y. The projected point is pinned to the edge endpoint on
/// the far side of the scan.
fn nearest_corner_y(a: Vec2, b: Vec2, corners: &[Vec2; 4], side: VerticalSide) -> NearestCorner {
    let mut order = [0, 1, 2, 3];
    if side == VerticalSide::Bottom {
        order.reverse();
    }

    for i in order {
        let corner = corners[i];
        let point = nearest_point_y_unclamped(a, b, corner);
        match side {
            VerticalSide::Top if corner.y <= point => {
                return NearestCorner { corner, point: point.min(b.y) };
            }
            VerticalSide::Bottom if corner.y >= point => {
                return NearestCorner { corner, point: point.max(a.y) };
            }
            _ => {}
        }
    }

    NearestCorner { corner: corners[0], point: nearest_point_y(a, b, corners[0]) }
}

/// Closest point to `p` on the rectangle's silhouette edges.
fn nearest_silhouette_point(rect: &Rect, p: Vec2) -> Vec2 {
    let [tl, tr, bl, br] = rect.corners();
    let edges = [(tl, tr), (tr, br), (br, bl), (bl, tl)];

    let mut best = tl;
    let mut best_distance = f32::INFINITY;
    for (a, b) in edges {
        let edge = b - a;
        let length_sq = edge.length_squared();
        let candidate = if length_sq == 0.0 {
            a
        } else {
            let t = ((p - a).dot(edge) / length_sq).clamp(0.0, 1.0);
            a + edge * t
        };
        let distance = p.distance_squared(candidate);
        if distance < best_distance {
            best_distance = distance;
            best = candidate;
        }
    }

    best
}

/// Last resort for overlaps neither directed phase matched (grazing and
/// corner-in-corner contacts): push the mover along the dominant axis of
/// center-to-nearest-silhouette-point. A zero delta (center exactly on the
/// silhouette) pushes opposite to the attempted movement instead.
fn fallback_constraints(mover: &Rect, obstacle: &Rect, movement: Vec2) -> Constraints {
    log::trace!("rotated solver fell back to center push");

    let mut constraints = Constraints::new();
    let corners_x = mover.corners_sorted_x();
    let corners_y = mover.corners_sorted_y();

    let nearest = nearest_silhouette_point(obstacle, mover.center());
    let delta = mover.center() - nearest;
    let push = if delta.length_squared() > 0.0 { delta } else { -movement };

    if push.x.abs() > push.y.abs() {
        if push.x >= 0.0 {
            let depth = (nearest.x - corners_x[0].x).max(0.0) + CONTACT_SHIFT;
            constraints.constrain_left(corners_x[0].x + depth);
            constraints.movement.x -= depth;
            constraints.hit.left = true;
        } else {
            let depth = (corners_x[3].x - nearest.x).max(0.0) + CONTACT_SHIFT;
            constraints.constrain_right(corners_x[3].x - depth);
            constraints.movement.x += depth;
            constraints.hit.right = true;
        }
    } else if push.y >= 0.0 {
        let depth = (nearest.y - corners_y[0].y).max(0.0) + CONTACT_SHIFT;
        constraints.constrain_top(corners_y[0].y + depth);
        constraints.movement.y -= depth;
        constraints.hit.top = true;
    } else {
        let depth = (corners_y[3].y - nearest.y).max(0.0) + CONTACT_SHIFT;
        constraints.constrain_bottom(corners_y[3].y - depth);
        constraints.movement.y += depth;
        constraints.hit.bottom = true;
    }

    constraints
}

/// Resolve an overlapping pair where at least one rectangle is rotated.
///
/// The caller must have established that the two rectangles overlap.
/// `movement` is the mover's attempted displacement this tick; the
/// absorbed portion is reported back through [`Constraints::movement`].
pub fn rotated_rect_vs_rect(mover: &Rect, obstacle: &Rect, movement: Vec2) -> Constraints {
    let has_rotation1 = mover.is_rotated();
    debug_assert!(has_rotation1 || obstacle.is_rotated());

    let mut constraints = Constraints::new();

    let corners1_x = mover.corners_sorted_x();
    let corners1_y = mover.corners_sorted_y();
    let corners2_x = obstacle.corners_sorted_x();
    let corners2_y = obstacle.corners_sorted_y();

    let middle1 = mover.center();

    let shape = classify(obstacle);
    let rotated2 = shape != Silhouette::None;

    // The shape's "peak" corners for edge construction. A rhombus puts its
    // side vertices at equal y, so the sort's x tie-break lands them in
    // swapped slots.
    let topmost_corner = if shape == Silhouette::Rhombus { corners2_y[2] } else { corners2_y[1] };
    let bottommost_corner = if shape == Silhouette::Rhombus { corners2_y[1] } else { corners2_y[2] };

    // Horizontal phase: approach from the left or right of the shape.
    match shape {
        Silhouette::None | Silhouette::FacingLeft => {
            if middle1.x <= corners2_y[3].x
                && middle1.y > if rotated2 { corners2_x[0].y } else { corners2_x[1].y }
            {
                // Left: the mover presses up against the underside edge.
                let point_y = nearest_corner_y(
                    topmost_corner,
                    corners2_y[3],
                    &corners1_y,
                    VerticalSide::Top,
                );
                constraints.constrain_top(corners1_y[0].y + point_y.distance_y() + CONTACT_SHIFT);
                constraints.movement.y -= point_y.distance_y() - CONTACT_SHIFT;
                constraints.hit.top = true;

                if !has_rotation1 && rotated2 {
                    let point_x = nearest_corner_x(
                        topmost_corner,
                        corners2_y[3],
                        &corners1_x,
                        HorizontalSide::Right,
                    );
                    constraints
                        .constrain_right(corners1_x[3].x - point_x.distance_x() - CONTACT_SHIFT);
                    constraints.hit.right = true;
                }
                return constraints;
            }

            if middle1.x >= corners2_y[0].x
                && middle1.y < if rotated2 { corners2_x[3].y } else { corners2_x[2].y }
            {
                // Right: the mover rests on the topside edge.
                let line_start_corner = if rotated2 { bottommost_corner } else { topmost_corner };

                let point_y = nearest_corner_y(
                    corners2_y[0],
                    line_start_corner,
                    &corners1_y,
                    VerticalSide::Bottom,
                );
                constraints.constrain_bottom(corners1_y[3].y - point_y.distance_y());
                constraints.movement.y += point_y.distance_y();
                constraints.hit.bottom = true;

                if !has_rotation1 && rotated2 {
                    let point_x = nearest_corner_x(
                        line_start_corner,
                        corners2_y[0],
                        &corners1_x,
                        HorizontalSide::Left,
                    );
                    constraints
                        .constrain_left(corners1_x[0].x + point_x.distance_x() + CONTACT_SHIFT);
                    constraints.hit.left = true;
                }
                return constraints;
            }
        }
        Silhouette::Rhombus | Silhouette::FacingRight => {
            if middle1.x <= corners2_y[0].x && middle1.y < corners2_x[0].y {
                // Left: the mover rests on the upper-left edge.
                let point_y = nearest_corner_y(
                    corners2_y[0],
                    bottommost_corner,
                    &corners1_y,
                    VerticalSide::Bottom,
                );
                constraints.constrain_bottom(corners1_y[3].y - point_y.distance_y());
                constraints.movement.y += point_y.distance_y();
                constraints.hit.bottom = true;

                if !has_rotation1 {
                    let point_x = nearest_corner_x(
                        bottommost_corner,
                        corners2_y[0],
                        &corners1_x,
                        HorizontalSide::Right,
                    );
                    constraints.constrain_right(corners1_x[3].x - point_x.distance_x());
                    constraints.hit.right = true;
                }
                return constraints;
            }

            if middle1.x >= corners2_y[3].x && middle1.y > corners2_x[3].y {
                // Right: the mover presses up against the lower-right edge.
                let point_y = nearest_corner_y(
                    topmost_corner,
                    corners2_y[3],
                    &corners1_y,
                    VerticalSide::Top,
                );
                constraints.constrain_top(corners1_y[0].y + point_y.distance_y() + CONTACT_SHIFT);
                constraints.movement.y -= point_y.distance_y() - CONTACT_SHIFT;
                constraints.hit.top = true;

                if !has_rotation1 {
                    let point_x = nearest_corner_x(
                        topmost_corner,
                        corners2_y[3],
                        &corners1_x,
                        HorizontalSide::Left,
                    );
                    constraints.constrain_left(corners1_x[0].x + point_x.distance_x());
                    constraints.hit.left = true;
                }
                return constraints;
            }
        }
    }

    // Vertical phase: approach from above or below the shape.
    let leftmost_corner = corners2_x[0];
    let rightmost_corner = corners2_x[3];

    match shape {
        Silhouette::None => {
            // A quarter-turned silhouette keeps flat tops: the remaining
            // contacts push purely sideways.
            if middle1.x < corners2_y[0].x && middle1.y <= corners2_y[2].y {
                let point_x = nearest_corner_x(
                    corners2_y[0],
                    corners2_y[2],
                    &corners1_x,
                    HorizontalSide::Right,
                );
                constraints.constrain_right(corners1_x[3].x - point_x.distance_x());
                constraints.movement.x += point_x.distance_x();
                constraints.hit.right = true;
                return constraints;
            }

            if middle1.y >= corners2_y[1].y {
                let point_x = nearest_corner_x(
                    corners2_y[1],
                    corners2_y[3],
                    &corners1_x,
                    HorizontalSide::Left,
                );
                constraints.constrain_left(corners1_x[0].x + point_x.distance_x());
                constraints.movement.x -= point_x.distance_x();
                constraints.hit.left = true;
                return constraints;
            }
        }
        Silhouette::FacingLeft => {
            if middle1.y <= leftmost_corner.y {
                // Above. A rotated mover can stand on its side across the
                // shape's top peak; the scan then runs over the obstacle's
                // corners against the mover's bottom edge.
                let peak = corners2_y[0];
                let edge_a = corners1_y[2];
                let edge_b = corners1_y[3];
                let point_y = if has_rotation1
                    && peak.x >= edge_a.x.min(edge_b.x)
                    && peak.x <= edge_a.x.max(edge_b.x)
                {
                    nearest_corner_y(edge_a, edge_b, &corners2_y, VerticalSide::Top)
                } else {
                    nearest_corner_y(
                        corners2_y[0],
                        leftmost_corner,
                        &corners1_y,
                        VerticalSide::Bottom,
                    )
                };
                constraints.constrain_bottom(corners1_y[3].y - point_y.distance_y());
                constraints.movement.y += point_y.distance_y();
                constraints.hit.bottom = true;
                return constraints;
            }

            if middle1.y >= rightmost_corner.y {
                // Below.
                let point_y = nearest_corner_y(
                    rightmost_corner,
                    corners2_y[3],
                    &corners1_y,
                    VerticalSide::Top,
                );
                constraints.constrain_top(corners1_y[0].y + point_y.distance_y() + CONTACT_SHIFT);
                constraints.movement.y -= point_y.distance_y() + CONTACT_SHIFT;
                constraints.hit.top = true;
                return constraints;
            }
        }
        Silhouette::Rhombus | Silhouette::FacingRight => {
            if middle1.y <= rightmost_corner.y {
                // Above.
                let point_y = nearest_corner_y(
                    corners2_y[0],
                    rightmost_corner,
                    &corners1_y,
                    VerticalSide::Bottom,
                );
                constraints.constrain_bottom(corners1_y[3].y - point_y.distance_y());
                constraints.movement.y += point_y.distance_y();
                constraints.hit.bottom = true;
                return constraints;
            }

            if middle1.y >= leftmost_corner.y {
                // Below.
                let point_y = nearest_corner_y(
                    leftmost_corner,
                    corners2_y[3],
                    &corners1_y,
                    VerticalSide::Top,
                );
                constraints.constrain_top(corners1_y[0].y + point_y.distance_y() + CONTACT_SHIFT);
                constraints.movement.y -= point_y.distance_y();
                constraints.hit.top = true;
                return constraints;
            }
        }
    }

    fallback_constraints(mover, obstacle, movement)
}
