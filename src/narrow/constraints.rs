//! The constraint accumulator every solver writes into
//!
//! A `Constraints` value is a four-sided clamp on where the mover's box may
//! end up this tick, plus a record of which sides made contact. Bounds only
//! ever narrow: each `constrain_*` call keeps the tighter of the current
//! and the new bound, so merging results from several obstacles is
//! order-independent.

use glam::Vec2;

/// Which sides of the mover's box made contact.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hit {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
    /// Set by the integrator when opposing bounds pinch the free span to
    /// nothing; no solver sets this itself.
    pub crush: bool,
    /// Unit normal of the slope surface that produced the contact; zero
    /// for flat contacts.
    pub slope_normal: Vec2,
}

/// Bounds on the mover's final position for one (mover, obstacle) pair.
///
/// `position_left`/`position_top` are lower bounds, `position_right`/
/// `position_bottom` upper bounds, all starting at ±infinity
/// ("unconstrained"). Constructed fresh per pair test, written by exactly
/// one solver call, merged by the caller, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraints {
    pub hit: Hit,
    /// How much of the attempted movement the rotated solver absorbed.
    pub movement: Vec2,
    position_left: f32,
    position_right: f32,
    position_top: f32,
    position_bottom: f32,
}

impl Default for Constraints {
    fn default() -> Self {
        Self::new()
    }
}

impl Constraints {
    pub fn new() -> Self {
        Self {
            hit: Hit::default(),
            movement: Vec2::ZERO,
            position_left: f32::NEG_INFINITY,
            position_right: f32::INFINITY,
            position_top: f32::NEG_INFINITY,
            position_bottom: f32::INFINITY,
        }
    }

    /// Raise the lower bound on the mover's left edge.
    pub fn constrain_left(&mut self, position: f32) {
        self.position_left = self.position_left.max(position);
    }

    /// Lower the upper bound on the mover's right edge.
    pub fn constrain_right(&mut self, position: f32) {
        self.position_right = self.position_right.min(position);
    }

    /// Raise the lower bound on the mover's top edge.
    pub fn constrain_top(&mut self, position: f32) {
        self.position_top = self.position_top.max(position);
    }

    /// Lower the upper bound on the mover's bottom edge.
    pub fn constrain_bottom(&mut self, position: f32) {
        self.position_bottom = self.position_bottom.min(position);
    }

    /// Narrow to the intersection of both sets of bounds and OR the hit
    /// flags together. `movement` and `slope_normal` stay per-pair; the
    /// integrator reads those from the individual results.
    pub fn merge(&mut self, other: &Constraints) {
        self.constrain_left(other.position_left);
        self.constrain_right(other.position_right);
        self.constrain_top(other.position_top);
        self.constrain_bottom(other.position_bottom);

        self.hit.left |= other.hit.left;
        self.hit.right |= other.hit.right;
        self.hit.top |= other.hit.top;
        self.hit.bottom |= other.hit.bottom;
        self.hit.crush |= other.hit.crush;
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.position_left
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.position_right
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.position_top
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position_bottom
    }

    #[inline]
    pub fn constrained_left(&self) -> bool {
        self.position_left > f32::NEG_INFINITY
    }

    #[inline]
    pub fn constrained_right(&self) -> bool {
        self.position_right < f32::INFINITY
    }

    #[inline]
    pub fn constrained_top(&self) -> bool {
        self.position_top > f32::NEG_INFINITY
    }

    #[inline]
    pub fn constrained_bottom(&self) -> bool {
        self.position_bottom < f32::INFINITY
    }

    pub fn has_any(&self) -> bool {
        self.constrained_left()
            || self.constrained_right()
            || self.constrained_top()
            || self.constrained_bottom()
    }

    /// Both horizontal bounds are finite.
    #[inline]
    pub fn constrained_horizontally(&self) -> bool {
        self.width() < f32::INFINITY
    }

    /// Both vertical bounds are finite.
    #[inline]
    pub fn constrained_vertically(&self) -> bool {
        self.height() < f32::INFINITY
    }

    /// Remaining free horizontal span.
    pub fn width(&self) -> f32 {
        self.position_right - self.position_left
    }

    /// Remaining free vertical span.
    pub fn height(&self) -> f32 {
        self.position_bottom - self.position_top
    }

    pub fn x_midpoint(&self) -> f32 {
        0.5 * (self.position_left + self.position_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fresh_constraints_are_unconstrained() {
        let c = Constraints::new();
        assert!(!c.has_any());
        assert!(!c.constrained_horizontally());
        assert!(!c.constrained_vertically());
        assert_eq!(c.width(), f32::INFINITY);
        assert_eq!(c.height(), f32::INFINITY);
    }

    #[test]
    fn test_bounds_only_narrow() {
        let mut c = Constraints::new();
        c.constrain_left(5.0);
        c.constrain_left(3.0);
        assert_eq!(c.left(), 5.0);
        c.constrain_left(8.0);
        assert_eq!(c.left(), 8.0);

        c.constrain_bottom(20.0);
        c.constrain_bottom(25.0);
        assert_eq!(c.bottom(), 20.0);
        c.constrain_bottom(15.0);
        assert_eq!(c.bottom(), 15.0);
    }

    #[test]
    fn test_span_queries() {
        let mut c = Constraints::new();
        c.constrain_left(2.0);
        assert!(!c.constrained_horizontally());
        c.constrain_right(10.0);
        assert!(c.constrained_horizontally());
        assert_eq!(c.width(), 8.0);
        assert_eq!(c.x_midpoint(), 6.0);

        c.constrain_top(0.0);
        c.constrain_bottom(3.0);
        assert_eq!(c.height(), 3.0);
    }

    #[test]
    fn test_merge_narrows_and_ors_flags() {
        let mut a = Constraints::new();
        a.constrain_left(1.0);
        a.constrain_right(10.0);
        a.hit.left = true;

        let mut b = Constraints::new();
        b.constrain_left(4.0);
        b.constrain_bottom(8.0);
        b.hit.bottom = true;
        b.hit.crush = true;

        a.merge(&b);
        assert_eq!(a.left(), 4.0);
        assert_eq!(a.right(), 10.0);
        assert_eq!(a.bottom(), 8.0);
        assert!(!a.constrained_top());
        assert!(a.hit.left);
        assert!(a.hit.bottom);
        assert!(a.hit.crush);
        assert!(!a.hit.right);
    }

    fn bounds_and_hit(c: &Constraints) -> (f32, f32, f32, f32, Hit) {
        (c.left(), c.right(), c.top(), c.bottom(), c.hit)
    }

    fn constraints_strategy() -> impl Strategy<Value = Constraints> {
        (
            prop::option::of(-1000.0f32..1000.0),
            prop::option::of(-1000.0f32..1000.0),
            prop::option::of(-1000.0f32..1000.0),
            prop::option::of(-1000.0f32..1000.0),
            any::<[bool; 5]>(),
        )
            .prop_map(|(left, right, top, bottom, flags)| {
                let mut c = Constraints::new();
                if let Some(v) = left {
                    c.constrain_left(v);
                }
                if let Some(v) = right {
                    c.constrain_right(v);
                }
                if let Some(v) = top {
                    c.constrain_top(v);
                }
                if let Some(v) = bottom {
                    c.constrain_bottom(v);
                }
                c.hit.left = flags[0];
                c.hit.right = flags[1];
                c.hit.top = flags[2];
                c.hit.bottom = flags[3];
                c.hit.crush = flags[4];
                c
            })
    }

    proptest! {
        #[test]
        fn test_merge_commutative(
            a in constraints_strategy(),
            b in constraints_strategy(),
        ) {
            let mut ab = a.clone();
            ab.merge(&b);
            let mut ba = b.clone();
            ba.merge(&a);
            prop_assert_eq!(bounds_and_hit(&ab), bounds_and_hit(&ba));
        }

        #[test]
        fn test_merge_associative(
            a in constraints_strategy(),
            b in constraints_strategy(),
            c in constraints_strategy(),
        ) {
            let mut ab_c = a.clone();
            ab_c.merge(&b);
            ab_c.merge(&c);

            let mut bc = b.clone();
            bc.merge(&c);
            let mut a_bc = a.clone();
            a_bc.merge(&bc);

            prop_assert_eq!(bounds_and_hit(&ab_c), bounds_and_hit(&a_bc));
        }

        #[test]
        fn test_merge_never_loosens(
            a in constraints_strategy(),
            b in constraints_strategy(),
        ) {
            let mut merged = a.clone();
            merged.merge(&b);
            prop_assert!(merged.left() >= a.left());
            prop_assert!(merged.right() <= a.right());
            prop_assert!(merged.top() >= a.top());
            prop_assert!(merged.bottom() <= a.bottom());
        }
    }
}
