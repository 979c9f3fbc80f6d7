use std::f32::consts::PI;

use ultraviolet::Vec2;

use super::{Bounds, Shape};

/// Circle defined by its center and radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle2D {
    center: Vec2,
    radius: f32,
    area: f32,
}

impl Circle2D {
    pub fn new(center: Vec2, radius: f32) -> Self {
        let mut this = Self {
            center,
            radius,
            area: 0.0,
        };
        this.recompute();
        this
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
        self.recompute();
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
        self.recompute();
    }

    /// X coordinate of the center.
    pub fn x(&self) -> f32 {
        self.center.x
    }

    /// Y coordinate of the center.
    pub fn y(&self) -> f32 {
        self.center.y
    }

    fn recompute(&mut self) {
        self.area = PI * self.radius * self.radius;
    }
}

impl Shape for Circle2D {
    fn area(&self) -> f32 {
        self.area
    }

    fn middle_point(&self) -> Vec2 {
        self.center
    }

    /// Bounding box is not computed for circles.
    fn bounds(&self) -> Option<Bounds> {
        None
    }
}
