use ultraviolet::Vec2;

use super::{Bounds, Shape};

/// Axis-aligned box defined by two opposite corners.
///
/// Corners may be given in any order.
///
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Box2D {
    point1: Vec2,
    point2: Vec2,
    bounds: Bounds,
    area: f32,
    middle_point: Vec2,
}

impl Box2D {
    /// Creates new box from two opposite corners.
    pub fn new(point1: Vec2, point2: Vec2) -> Self {
        let mut this = Self {
            point1,
            point2,
            bounds: Bounds::default(),
            area: 0.0,
            middle_point: Vec2::zero(),
        };
        this.recompute();
        this
    }

    pub fn point1(&self) -> Vec2 {
        self.point1
    }

    pub fn set_point1(&mut self, point: Vec2) {
        self.point1 = point;
        self.recompute();
    }

    pub fn point2(&self) -> Vec2 {
        self.point2
    }

    pub fn set_point2(&mut self, point: Vec2) {
        self.point2 = point;
        self.recompute();
    }

    pub fn width(&self) -> f32 {
        self.bounds.width()
    }

    pub fn height(&self) -> f32 {
        self.bounds.height()
    }

    fn recompute(&mut self) {
        let (p1, p2) = (self.point1, self.point2);
        self.bounds = Bounds {
            x_min: p1.x.min(p2.x),
            x_max: p1.x.max(p2.x),
            y_min: p1.y.min(p2.y),
            y_max: p1.y.max(p2.y),
        };
        self.area = self.bounds.width() * self.bounds.height();
        self.middle_point = self.bounds.middle();
    }
}

impl Shape for Box2D {
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
