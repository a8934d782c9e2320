//! Directed lines and axis-wise nearest-point queries
//!
//! The rotated-rectangle solver never needs full closest-point-on-segment
//! results; it only ever asks "where, along one axis, is the point on this
//! edge nearest to p". The free functions below answer exactly that.

use glam::Vec2;

/// An infinite directed line: origin plus (unit) direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub origin: Vec2,
    pub direction: Vec2,
}

impl Line {
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        Self { origin, direction }
    }

    /// Perpendicular projection of `point` onto the line.
    pub fn project(&self, point: Vec2) -> Vec2 {
        let distance = self.direction.dot(point - self.origin);
        self.origin + self.direction * distance
    }
}

/// X coordinate of the point reached by casting horizontally from `p` onto
/// segment `a`-`b` (the segment's point at `p`'s height), clamped to the
/// segment's horizontal extent. A horizontal segment (`a.y == b.y`) reports
/// `p.x` itself.
#[inline]
pub fn nearest_point_x(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    let result = nearest_point_x_unclamped(a, b, p);

    if (a.x < b.x && result < a.x) || (a.x > b.x && result > a.x) {
        a.x
    } else if (a.x > b.x && result < b.x) || (a.x < b.x && result > b.x) {
        b.x
    } else {
        result
    }
}

/// Like [`nearest_point_x`], but on the infinite line through `a` and `b`.
#[inline]
pub fn nearest_point_x_unclamped(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    if a.y == b.y {
        p.x
    } else {
        ((a.y - p.y) * b.x - (b.y - p.y) * a.x) / (a.y - b.y)
    }
}

/// Y coordinate of the point reached by casting vertically from `p` onto
/// segment `a`-`b` (the segment's point at `p`'s x), clamped to the
/// segment's vertical extent. A vertical segment (`a.x == b.x`) reports
/// `p.y` itself.
#[inline]
pub fn nearest_point_y(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    let result = nearest_point_y_unclamped(a, b, p);

    if (a.y < b.y && result < a.y) || (a.y > b.y && result > a.y) {
        a.y
    } else if (a.y > b.y && result < b.y) || (a.y < b.y && result > b.y) {
        b.y
    } else {
        result
    }
}

/// Like [`nearest_point_y`], but on the infinite line through `a` and `b`.
#[inline]
pub fn nearest_point_y_unclamped(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    if a.x == b.x {
        p.y
    } else {
        ((a.x - p.x) * b.y - (b.x - p.x) * a.y) / (a.x - b.x)
    }
}
