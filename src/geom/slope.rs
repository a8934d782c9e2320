//! Slope descriptors for tile collision
//!
//! A slope is a right-triangle-shaped solid encoded as a bounding box plus
//! an orientation (which corner of the box holds the right angle) and an
//! optional deformation that restricts the working hypotenuse to one half
//! of the box. Deformations chain gentler slopes across neighboring tiles
//! without authoring extra tile shapes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Rect;

/// Which corner of the bounding box holds the slope's right angle. With y
/// growing downward, `Southwest` is the floor slope that is tall at the
/// left and descends to the right; `Northeast` is its ceiling mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlopeDir {
    Southwest,
    Northeast,
    Southeast,
    Northwest,
}

/// Restrict the working hypotenuse to one half of the bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SlopeDeform {
    #[default]
    None,
    /// Upper half of the box.
    Top,
    /// Lower half of the box.
    Bottom,
    /// Left half of the box.
    Left,
    /// Right half of the box.
    Right,
}

/// An axis-aligned right-triangle solid, as authored in level data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slope {
    pub bbox: Rect,
    pub dir: SlopeDir,
    #[serde(default)]
    pub deform: SlopeDeform,
}

impl Slope {
    pub fn new(bbox: Rect, dir: SlopeDir) -> Self {
        Self { bbox, dir, deform: SlopeDeform::None }
    }

    pub fn with_deform(bbox: Rect, dir: SlopeDir, deform: SlopeDeform) -> Self {
        Self { bbox, dir, deform }
    }

    /// The box the working hypotenuse spans: the full bounding box, or the
    /// half selected by the deformation.
    pub fn working_area(&self) -> Rect {
        let bbox = &self.bbox;
        let half_width = bbox.width() / 2.0;
        let half_height = bbox.height() / 2.0;

        match self.deform {
            SlopeDeform::None => *bbox,
            SlopeDeform::Top => Rect::from_points(
                bbox.pos,
                Vec2::new(bbox.right(), bbox.top() + half_height),
            ),
            SlopeDeform::Bottom => Rect::from_points(
                Vec2::new(bbox.left(), bbox.top() + half_height),
                bbox.p2(),
            ),
            SlopeDeform::Left => Rect::from_points(
                bbox.pos,
                Vec2::new(bbox.left() + half_width, bbox.bottom()),
            ),
            SlopeDeform::Right => Rect::from_points(
                Vec2::new(bbox.left() + half_width, bbox.top()),
                bbox.p2(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox() -> Rect {
        Rect::from_points(Vec2::new(0.0, 0.0), Vec2::new(32.0, 32.0))
    }

    #[test]
    fn test_working_area_full_box() {
        let slope = Slope::new(bbox(), SlopeDir::Southwest);
        assert_eq!(slope.working_area(), bbox());
    }

    #[test]
    fn test_working_area_halves() {
        let top = Slope::with_deform(bbox(), SlopeDir::Southwest, SlopeDeform::Top);
        assert_eq!(top.working_area(), Rect::from_points(Vec2::ZERO, Vec2::new(32.0, 16.0)));

        let bottom = Slope::with_deform(bbox(), SlopeDir::Southwest, SlopeDeform::Bottom);
        assert_eq!(
            bottom.working_area(),
            Rect::from_points(Vec2::new(0.0, 16.0), Vec2::new(32.0, 32.0))
        );

        let left = Slope::with_deform(bbox(), SlopeDir::Southwest, SlopeDeform::Left);
        assert_eq!(left.working_area(), Rect::from_points(Vec2::ZERO, Vec2::new(16.0, 32.0)));

        let right = Slope::with_deform(bbox(), SlopeDir::Southwest, SlopeDeform::Right);
        assert_eq!(
            right.working_area(),
            Rect::from_points(Vec2::new(16.0, 0.0), Vec2::new(32.0, 32.0))
        );
    }

    #[test]
    fn test_slope_from_level_data() {
        // Slopes arrive deserialized from authored level data; deform is
        // optional there.
        let slope: Slope = serde_json::from_str(
            r#"{
                "bbox": { "pos": [64.0, 96.0], "size": [32.0, 32.0] },
                "dir": "Southwest"
            }"#,
        )
        .unwrap();

        assert_eq!(slope.dir, SlopeDir::Southwest);
        assert_eq!(slope.deform, SlopeDeform::None);
        assert_eq!(slope.bbox.right(), 96.0);
    }
}
