use ultraviolet::Vec2;

use super::{Bounds, Shape};
use crate::error::{Error, Result};

/// Triangle defined by exactly three points.
///
/// Middle point of the triangle is its centroid.
///
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle2D {
    points: [Vec2; 3],
    bounds: Bounds,
    area: f32,
    middle_point: Vec2,
}

impl Triangle2D {
    pub fn new(point1: Vec2, point2: Vec2, point3: Vec2) -> Self {
        let mut this = Self {
            points: [point1, point2, point3],
            bounds: Bounds::default(),
            area: 0.0,
            middle_point: Vec2::zero(),
        };
        this.recompute();
        this
    }

    pub fn points(&self) -> &[Vec2; 3] {
        &self.points
    }

    /// Replaces all points of the triangle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if count of points is not 3.
    /// Triangle stays untouched in this case.
    ///
    pub fn set_points(&mut self, points: &[Vec2]) -> Result<()> {
        self.points = match *points {
            [point1, point2, point3] => [point1, point2, point3],
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "triangle requires exactly 3 points, got {}",
                    points.len(),
                )))
            }
        };
        self.recompute();
        Ok(())
    }

    pub fn width(&self) -> f32 {
        self.bounds.width()
    }

    pub fn height(&self) -> f32 {
        self.bounds.height()
    }

    fn recompute(&mut self) {
        let [a, b, c] = self.points;
        self.bounds = Bounds::from_points(&self.points).unwrap_or_default();
        self.area = (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)).abs() / 2.0;
        self.middle_point = (a + b + c) / 3.0;
    }
}

impl Shape for Triangle2D {
    fn area(&self) -> f32 {
        self.area
    }

    fn middle_point(&self) -> Vec2 {
        self.middle_point
    }

    fn bounds(&self) -> Option<Bounds> {
        Some(self.bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::assert_approx;

    fn right_triangle() -> Triangle2D {
        Triangle2D::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(0.0, 3.0))
    }

    #[test]
    fn test_properties() {
        let triangle = right_triangle();
        assert_eq!(triangle.area(), 6.0);
        assert_approx(triangle.middle_point().x, 4.0 / 3.0);
        assert_approx(triangle.middle_point().y, 1.0);
        assert_eq!(triangle.width(), 4.0);
        assert_eq!(triangle.height(), 3.0);
    }

    #[test]
    fn test_set_points() {
        let mut triangle = right_triangle();
        triangle
            .set_points(&[Vec2::new(0.0, 0.0), Vec2::new(8.0, 0.0), Vec2::new(0.0, 8.0)])
            .unwrap();
        triangle
            .set_points(&[Vec2::new(1.0, 1.0), Vec2::new(3.0, 1.0), Vec2::new(1.0, 4.0)])
            .unwrap();
        assert_eq!(triangle.area(), 3.0);
        let bounds = triangle.bounds().unwrap();
        assert_eq!((bounds.x_min, bounds.x_max), (1.0, 3.0));
        assert_eq!((bounds.y_min, bounds.y_max), (1.0, 4.0));
        assert_approx(triangle.middle_point().x, 5.0 / 3.0);
        assert_approx(triangle.middle_point().y, 2.0);
    }

    #[test]
    fn test_wrong_point_count() {
        let mut triangle = right_triangle();
        let four = [Vec2::zero(); 4];
        assert!(matches!(
            triangle.set_points(&four),
            Err(Error::InvalidArgument(_)),
        ));
        assert!(matches!(
            triangle.set_points(&four[..2]),
            Err(Error::InvalidArgument(_)),
        ));
        assert_eq!(triangle, right_triangle());
    }
}
