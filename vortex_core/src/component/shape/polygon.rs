use ultraviolet::Vec2;

use super::{Bounds, Shape};
use crate::error::{Error, Result};

/// Polygon defined by ordered list of its vertices.
///
/// Middle point of the polygon is the middle of its bounding box,
/// not the area-weighted centroid.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2D {
    points: Vec<Vec2>,
    bounds: Bounds,
    area: f32,
    middle_point: Vec2,
}

impl Polygon2D {
    /// Creates new polygon from its vertices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if there are no vertices.
    ///
    pub fn new(points: Vec<Vec2>) -> Result<Self> {
        let mut this = Self {
            points: Vec::new(),
            bounds: Bounds::default(),
            area: 0.0,
            middle_point: Vec2::zero(),
        };
        this.set_points(points)?;
        Ok(this)
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Replaces all vertices of the polygon.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if there are no vertices.
    /// Polygon stays untouched in this case.
    ///
    pub fn set_points(&mut self, points: Vec<Vec2>) -> Result<()> {
        let bounds = Bounds::from_points(&points).ok_or_else(|| {
            Error::InvalidArgument("polygon requires at least one point".to_string())
        })?;
        self.area = shoelace_area(&points);
        self.middle_point = bounds.middle();
        self.bounds = bounds;
        self.points = points;
        Ok(())
    }

    pub fn width(&self) -> f32 {
        self.bounds.width()
    }

    pub fn height(&self) -> f32 {
        self.bounds.height()
    }
}

impl Shape for Polygon2D {
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

/// Unsigned area of the polygon by the shoelace formula.
fn shoelace_area(points: &[Vec2]) -> f32 {
    let next = points.iter().cycle().skip(1);
    let doubled: f32 = points
        .iter()
        .zip(next)
        .map(|(a, b)| a.x * b.y - a.y * b.x)
        .sum();
    doubled.abs() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::assert_approx;

    fn unit_square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_unit_square() {
        let polygon = Polygon2D::new(unit_square()).unwrap();
        assert_eq!(polygon.area(), 1.0);
        assert_eq!(polygon.width(), 1.0);
        assert_eq!(polygon.height(), 1.0);
        assert_eq!(polygon.middle_point(), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_winding_order() {
        let mut points = unit_square();
        points.reverse();
        let polygon = Polygon2D::new(points).unwrap();
        assert_eq!(polygon.area(), 1.0);
    }

    #[test]
    fn test_middle_point_is_bounds_middle() {
        // L-shaped polygon: true centroid differs from the middle of its bounds.
        let polygon = Polygon2D::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 4.0),
            Vec2::new(0.0, 4.0),
        ])
        .unwrap();
        assert_approx(polygon.area(), 7.0);
        assert_eq!(polygon.middle_point(), Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_set_points_twice() {
        let mut polygon = Polygon2D::new(unit_square()).unwrap();
        polygon
            .set_points(vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(10.0, 10.0),
            ])
            .unwrap();
        polygon
            .set_points(vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(2.0, 0.0),
                Vec2::new(2.0, 3.0),
                Vec2::new(0.0, 3.0),
            ])
            .unwrap();
        assert_eq!(polygon.area(), 6.0);
        let bounds = polygon.bounds().unwrap();
        assert_eq!((bounds.x_max, bounds.y_max), (2.0, 3.0));
        assert_eq!(polygon.points().len(), 4);
    }

    #[test]
    fn test_empty() {
        assert!(matches!(
            Polygon2D::new(Vec::new()),
            Err(Error::InvalidArgument(_)),
        ));

        let mut polygon = Polygon2D::new(unit_square()).unwrap();
        assert!(polygon.set_points(Vec::new()).is_err());
        assert_eq!(polygon.area(), 1.0);
        assert_eq!(polygon.points().len(), 4);
    }

    #[test]
    fn test_degenerate() {
        let polygon = Polygon2D::new(vec![Vec2::new(3.0, 3.0)]).unwrap();
        assert_eq!(polygon.area(), 0.0);
        assert_eq!(polygon.middle_point(), Vec2::new(3.0, 3.0));
    }
}
