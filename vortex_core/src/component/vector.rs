//! 2D vector component.

use ultraviolet::Vec2;

/// Vector in 2D space.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the vector.
    pub fn magnitude(&self) -> f32 {
        Vec2::from(*self).mag()
    }
}

impl From<Vec2> for Vector2D {
    fn from(vec: Vec2) -> Self {
        Self::new(vec.x, vec.y)
    }
}

impl From<Vector2D> for Vec2 {
    fn from(vector: Vector2D) -> Self {
        Vec2::new(vector.x, vector.y)
    }
}

impl From<(f32, f32)> for Vector2D {
    fn from(tuple: (f32, f32)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}
