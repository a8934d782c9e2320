//! Rectangle vs rectangle constraint resolution
//!
//! Single-axis, single-side resolution: the solver picks whichever axis has
//! the smaller total penetration and constrains only the shallower side of
//! it. Any remaining overlap on the other axis is left for a later tick or
//! a different obstacle pair to resolve.

use glam::Vec2;

use super::Constraints;
use super::rotated::rotated_rect_vs_rect;
use crate::geom::Rect;

/// Resolve a pair of overlapping axis-aligned rectangles.
///
/// The caller must have established that `mover` and `obstacle` overlap.
/// Exactly one side is constrained and exactly one hit flag set.
pub fn aligned_rect_vs_rect(mover: &Rect, obstacle: &Rect) -> Constraints {
    let mut constraints = Constraints::new();

    let itop = mover.bottom() - obstacle.top();
    let ibottom = obstacle.bottom() - mover.top();
    let ileft = mover.right() - obstacle.left();
    let iright = obstacle.right() - mover.left();

    let vert_penetration = itop.min(ibottom);
    let horiz_penetration = ileft.min(iright);

    if vert_penetration < horiz_penetration {
        if itop < ibottom {
            constraints.constrain_bottom(obstacle.top());
            constraints.hit.bottom = true;
        } else {
            constraints.constrain_top(obstacle.bottom());
            constraints.hit.top = true;
        }
    } else if ileft < iright {
        constraints.constrain_right(obstacle.left());
        constraints.hit.right = true;
    } else {
        constraints.constrain_left(obstacle.right());
        constraints.hit.left = true;
    }

    constraints
}

/// Resolve a pair of overlapping rectangles, dispatching on rotation.
///
/// `movement` is the mover's attempted displacement this tick; it only
/// matters on the rotated path.
pub fn rect_vs_rect(mover: &Rect, obstacle: &Rect, movement: Vec2) -> Constraints {
    if mover.is_rotated() || obstacle.is_rotated() {
        rotated_rect_vs_rect(mover, obstacle, movement)
    } else {
        aligned_rect_vs_rect(mover, obstacle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x1: f32, y1: f32, x2: f32, y2: f32) -> Rect {
        Rect::from_points(Vec2::new(x1, y1), Vec2::new(x2, y2))
    }

    fn hit_count(c: &Constraints) -> usize {
        [c.hit.left, c.hit.right, c.hit.top, c.hit.bottom]
            .iter()
            .filter(|&&f| f)
            .count()
    }

    #[test]
    fn test_horizontal_overlap_constrains_right() {
        // 5-unit horizontal overlap, no vertical slack: resolve leftward.
        let mover = rect(0.0, 0.0, 10.0, 10.0);
        let obstacle = rect(5.0, 0.0, 15.0, 10.0);

        let c = aligned_rect_vs_rect(&mover, &obstacle);
        assert_eq!(c.right(), 5.0);
        assert!(c.hit.right);
        assert_eq!(hit_count(&c), 1);
        assert!(!c.constrained_left());
        assert!(!c.constrained_top());
        assert!(!c.constrained_bottom());
    }

    #[test]
    fn test_vertical_overlap_constrains_bottom() {
        // 2-unit vertical overlap beats the full-width horizontal one.
        let mover = rect(0.0, 0.0, 10.0, 10.0);
        let obstacle = rect(0.0, 8.0, 10.0, 18.0);

        let c = aligned_rect_vs_rect(&mover, &obstacle);
        assert_eq!(c.bottom(), 8.0);
        assert!(c.hit.bottom);
        assert_eq!(hit_count(&c), 1);
    }

    #[test]
    fn test_shallower_side_wins_within_axis() {
        // Mover overlaps the obstacle's right flank: pushing further right
        // is cheaper than pushing all the way out the left.
        let mover = rect(8.0, 0.0, 18.0, 10.0);
        let obstacle = rect(0.0, 0.0, 10.0, 10.0);

        let c = aligned_rect_vs_rect(&mover, &obstacle);
        assert_eq!(c.left(), 10.0);
        assert!(c.hit.left);
        assert_eq!(hit_count(&c), 1);
    }

    #[test]
    fn test_deterministic() {
        let mover = rect(0.0, 0.0, 10.0, 10.0);
        let obstacle = rect(5.0, 3.0, 15.0, 13.0);

        let a = aligned_rect_vs_rect(&mover, &obstacle);
        let b = aligned_rect_vs_rect(&mover, &obstacle);
        assert_eq!(a, b);
    }

    #[test]
    fn test_dispatch_uses_aligned_path_for_unrotated() {
        let mover = rect(0.0, 0.0, 10.0, 10.0);
        let obstacle = rect(5.0, 0.0, 15.0, 10.0);

        let c = rect_vs_rect(&mover, &obstacle, Vec2::new(1.0, 0.0));
        assert_eq!(c, aligned_rect_vs_rect(&mover, &obstacle));
    }

    #[test]
    fn test_dispatch_uses_rotated_path_for_rotated_obstacle() {
        let mover = rect(0.0, 0.0, 10.0, 10.0);
        let mut obstacle = rect(8.0, 0.0, 18.0, 10.0);
        obstacle.angle = 45.0;

        let c = rect_vs_rect(&mover, &obstacle, Vec2::ZERO);
        assert_eq!(c, rotated_rect_vs_rect(&mover, &obstacle, Vec2::ZERO));
    }

    proptest! {
        #[test]
        fn test_exactly_one_side_for_any_overlap(
            (x1, y1) in (-100.0f32..100.0, -100.0f32..100.0),
            (w1, h1) in (1.0f32..50.0, 1.0f32..50.0),
            (w2, h2) in (1.0f32..50.0, 1.0f32..50.0),
            (fx, fy) in (0.01f32..0.99, 0.01f32..0.99),
        ) {
            let mover = Rect::new(Vec2::new(x1, y1), Vec2::new(w1, h1));
            // Place the obstacle so the pair always overlaps.
            let x2 = x1 - w2 + fx * (w1 + w2);
            let y2 = y1 - h2 + fy * (h1 + h2);
            let obstacle = Rect::new(Vec2::new(x2, y2), Vec2::new(w2, h2));
            prop_assert!(mover.overlaps(&obstacle));

            let c = aligned_rect_vs_rect(&mover, &obstacle);
            prop_assert_eq!(hit_count(&c), 1);

            let constrained = [
                c.constrained_left(),
                c.constrained_right(),
                c.constrained_top(),
                c.constrained_bottom(),
            ];
            prop_assert_eq!(constrained.iter().filter(|&&f| f).count(), 1);
        }
    }
}
