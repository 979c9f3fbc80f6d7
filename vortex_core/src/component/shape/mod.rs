//! Geometric primitive components.
//!
//! Every primitive owns its defining geometry and caches properties derived from it
//! (bounding box, area, middle point). Setters which change the geometry recompute
//! all derived properties before returning, so reads never observe stale values.

use ultraviolet::Vec2;

pub use box2d::Box2D;
pub use circle::Circle2D;
pub use polygon::Polygon2D;
pub use triangle::Triangle2D;

mod box2d;
mod circle;
mod polygon;
mod triangle;

/// Common properties of all geometric primitives.
pub trait Shape {
    /// Area of the shape.
    fn area(&self) -> f32;

    /// Representative middle point of the shape.
    ///
    /// Its meaning depends on the shape type.
    ///
    fn middle_point(&self) -> Vec2;

    /// Axis-aligned bounding box of the shape, if it is computed for this shape type.
    fn bounds(&self) -> Option<Bounds>;
}

/// Axis-aligned bounding box.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Bounds {
    /// Computes bounding box of given points.
    ///
    /// Returns `None` if there are no points.
    ///
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Vec2>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let bounds = Self {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
        };
        Some(points.fold(bounds, |bounds, point| Self {
            x_min: bounds.x_min.min(point.x),
            x_max: bounds.x_max.max(point.x),
            y_min: bounds.y_min.min(point.y),
            y_max: bounds.y_max.max(point.y),
        }))
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    /// Middle point of the bounding box.
    pub fn middle(&self) -> Vec2 {
        Vec2::new(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Returns `true` if the point lies inside of the bounding box or on its border.
    pub fn contains(&self, point: Vec2) -> bool {
        (self.x_min..=self.x_max).contains(&point.x) && (self.y_min..=self.y_max).contains(&point.y)
    }
}
