//! Bounding rectangle for 2D shapes

use super::Vector2;
use std::fmt;

/// 2D bounding rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum point (lower-left corner)
    pub min: Vector2,
    /// Maximum point (upper-right corner)
    pub max: Vector2,
}

impl Bounds {
    /// Create a new bounding rectangle from min and max points
    pub fn new(min: Vector2, max: Vector2) -> Self {
        Bounds { min, max }
    }

    /// Create a bounding rectangle from a single point
    pub fn from_point(point: Vector2) -> Self {
        Bounds {
            min: point,
            max: point,
        }
    }

    /// Create a bounding rectangle that contains all given points
    pub fn from_points(points: &[Vector2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Bounds::from_point(*first);
        for point in rest {
            bounds.expand_to_include(*point);
        }
        Some(bounds)
    }

    /// Get the width of the bounding rectangle
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Get the height of the bounding rectangle
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// The longer of width and height
    pub fn max_axis(&self) -> f64 {
        self.width().max(self.height())
    }

    /// Get the center point of the bounding rectangle
    pub fn center(&self) -> Vector2 {
        Vector2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Check if this bounding rectangle contains a point
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Expand the bounding rectangle to include another point
    pub fn expand_to_include(&mut self, point: Vector2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Merge with another bounding rectangle
    pub fn merge(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: Vector2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Vector2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bounds[{} -> {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let points = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 5.0),
            Vector2::new(-5.0, 3.0),
        ];
        let bounds = Bounds::from_points(&points).unwrap();
        assert_eq!(bounds.min, Vector2::new(-5.0, 0.0));
        assert_eq!(bounds.max, Vector2::new(10.0, 5.0));
    }

    #[test]
    fn test_from_points_empty() {
        assert!(Bounds::from_points(&[]).is_none());
    }

    #[test]
    fn test_dimensions() {
        let bounds = Bounds::new(Vector2::new(0.0, 0.0), Vector2::new(10.0, 5.0));
        assert_eq!(bounds.width(), 10.0);
        assert_eq!(bounds.height(), 5.0);
        assert_eq!(bounds.max_axis(), 10.0);
        assert_eq!(bounds.center(), Vector2::new(5.0, 2.5));
    }

    #[test]
    fn test_merge() {
        let a = Bounds::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0));
        let b = Bounds::new(Vector2::new(-1.0, 0.5), Vector2::new(0.5, 2.0));
        let merged = a.merge(&b);
        assert_eq!(merged.min, Vector2::new(-1.0, 0.0));
        assert_eq!(merged.max, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn test_contains() {
        let bounds = Bounds::new(Vector2::new(0.0, 0.0), Vector2::new(10.0, 10.0));
        assert!(bounds.contains(Vector2::new(5.0, 5.0)));
        assert!(!bounds.contains(Vector2::new(15.0, 5.0)));
    }
}
