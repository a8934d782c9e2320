//! Rectangles with an optional rotation angle
//!
//! A rectangle is stored as its axis-aligned top-left corner and size plus
//! an angle in degrees about its center. Corners are derived on demand and
//! never cached, so mutating `pos`/`size`/`angle` can't leave stale
//! geometry behind.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Line;
use crate::consts::{ANGLE_EPSILON, SIZE_EPSILON};
use crate::rotate_deg;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner (before rotation).
    pub pos: Vec2,
    /// Width and height; both non-negative.
    pub size: Vec2,
    /// Rotation in degrees about the rectangle's center.
    #[serde(default)]
    pub angle: f32,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self::with_angle(pos, size, 0.0)
    }

    pub fn with_angle(pos: Vec2, size: Vec2, angle: f32) -> Self {
        debug_assert!(size.x >= 0.0 && size.y >= 0.0);
        Self { pos, size, angle }
    }

    /// Rectangle spanning from top-left `p1` to bottom-right `p2`.
    pub fn from_points(p1: Vec2, p2: Vec2) -> Self {
        Self::new(p1, p2 - p1)
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center - size / 2.0, size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Bottom-right corner (before rotation).
    #[inline]
    pub fn p2(&self) -> Vec2 {
        self.pos + self.size
    }

    pub fn moved(&self, delta: Vec2) -> Self {
        Self { pos: self.pos + delta, ..*self }
    }

    /// Expand (or, with a negative border, shrink) on all four sides. If
    /// shrinking would flip the size negative the rectangle is returned
    /// unchanged.
    pub fn grown(&self, border: f32) -> Self {
        if self.size.x + border * 2.0 < 0.0 || self.size.y + border * 2.0 < 0.0 {
            return *self;
        }
        Self {
            pos: self.pos - Vec2::splat(border),
            size: self.size + Vec2::splat(border * 2.0),
            angle: self.angle,
        }
    }

    pub fn is_square(&self) -> bool {
        // Loose comparison; sizes come from authored data but are stored
        // as floats.
        (self.size.x - self.size.y).abs() < SIZE_EPSILON
    }

    /// Whether the rotation angle actually changes the silhouette: not a
    /// multiple of 180 degrees, and for squares not a multiple of 90 (a
    /// square looks identical at quarter turns).
    pub fn is_rotated(&self) -> bool {
        let half_turn = self.angle.rem_euclid(180.0);
        if half_turn < ANGLE_EPSILON || half_turn > 180.0 - ANGLE_EPSILON {
            return false;
        }
        if self.is_square() {
            let quarter_turn = self.angle.rem_euclid(90.0);
            if quarter_turn < ANGLE_EPSILON || quarter_turn > 90.0 - ANGLE_EPSILON {
                return false;
            }
        }
        true
    }

    /// The four corners, rotated about the center when the rectangle is
    /// rotated. Order before rotation: top-left, top-right, bottom-left,
    /// bottom-right.
    pub fn corners(&self) -> [Vec2; 4] {
        let mut corners = [
            self.pos,
            self.pos + Vec2::new(self.size.x, 0.0),
            self.pos + Vec2::new(0.0, self.size.y),
            self.pos + self.size,
        ];

        if self.is_rotated() {
            let middle = self.center();
            for corner in &mut corners {
                *corner = middle + rotate_deg(*corner - middle, self.angle);
            }
        }

        corners
    }

    /// Corners sorted by ascending x, ties broken by y. Gives the leftmost
    /// and rightmost corners at the ends regardless of rotation.
    pub fn corners_sorted_x(&self) -> [Vec2; 4] {
        let mut corners = self.corners();
        corners.sort_unstable_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        corners
    }

    /// Corners sorted by ascending y, ties broken by x.
    pub fn corners_sorted_y(&self) -> [Vec2; 4] {
        let mut corners = self.corners();
        corners.sort_unstable_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));
        corners
    }

    /// The rectangle's two unit axes as directed lines through its center.
    pub fn axis(&self) -> (Line, Line) {
        let middle = self.center();
        (
            Line::new(middle, rotate_deg(Vec2::X, self.angle)),
            Line::new(middle, rotate_deg(Vec2::Y, self.angle)),
        )
    }

    pub fn contains_point(&self, v: Vec2) -> bool {
        if self.is_rotated() {
            return projections_overlap(&[v], self);
        }

        v.x >= self.left() && v.y >= self.top() && v.x < self.right() && v.y < self.bottom()
    }

    /// Whether the two rectangles overlap. Axis-aligned pairs use strict
    /// box intersection, so rectangles that merely touch along an edge do
    /// NOT overlap. If either is rotated, both projection checks must pass.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.is_rotated() || other.is_rotated() {
            return projections_overlap(&self.corners(), other)
                && projections_overlap(&other.corners(), self);
        }

        if self.left() >= other.right() || other.left() >= self.right() {
            return false;
        }
        if self.top() >= other.bottom() || other.top() >= self.bottom() {
            return false;
        }
        true
    }
}

/// One half of the rotated overlap test: project `corners` onto both of
/// `rect`'s axes and require each projection to overlap `rect`'s own extent
/// on that axis. Run with the roles swapped as well for a full check.
fn projections_overlap(corners: &[Vec2], rect: &Rect) -> bool {
    let (axis_x, axis_y) = rect.axis();
    let middle = rect.center();

    let axes = [(axis_x, rect.width() / 2.0), (axis_y, rect.height() / 2.0)];
    for (line, half_size) in axes {
        let mut min_distance = f32::INFINITY;
        let mut max_distance = f32::NEG_INFINITY;

        for &corner in corners {
            let projection = line.project(corner) - middle;
            let sign = projection.dot(line.direction) > 0.0;
            let distance = projection.length() * if sign { 1.0 } else { -1.0 };

            min_distance = min_distance.min(distance);
            max_distance = max_distance.max(distance);
        }

        let straddles = min_distance < 0.0 && max_distance > 0.0;
        if !(straddles || min_distance.abs() < half_size || max_distance.abs() < half_size) {
            return false;
        }
    }

    true
}
