//! 2D point math in chart space.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A coordinate in chart-native units.
pub type AnchorPoint = DVec2;

/// Axis-aligned bounds of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// A box containing only `point`.
    pub fn at(point: AnchorPoint) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }

    pub fn include(&mut self, point: AnchorPoint) {
        self.min_x = self.min_x.min(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_x = self.max_x.max(point.x);
        self.max_y = self.max_y.max(point.y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn contains(&self, point: AnchorPoint) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_and_lerp() {
        let a = AnchorPoint::new(0.0, 0.0);
        let b = AnchorPoint::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.lerp(b, 0.5), AnchorPoint::new(1.5, 2.0));
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_normalize_zero_vector() {
        assert!(AnchorPoint::default().try_normalize().is_none());
        let n = AnchorPoint::new(0.0, -2.0).try_normalize().unwrap();
        assert_eq!(n, AnchorPoint::new(0.0, -1.0));
    }

    #[test]
    fn test_bounding_box_include() {
        let mut bounds = BoundingBox::at(AnchorPoint::new(1.0, 1.0));
        bounds.include(AnchorPoint::new(-2.0, 5.0));
        assert_eq!(bounds.min_x, -2.0);
        assert_eq!(bounds.max_y, 5.0);
        assert_eq!(bounds.width(), 3.0);
        assert_eq!(bounds.height(), 4.0);
        assert!(bounds.contains(AnchorPoint::new(0.0, 2.0)));
    }
}
