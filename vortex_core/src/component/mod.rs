//! Components of game engine which can be attached to entities.

pub use color::Color;
pub use shape::{Bounds, Box2D, Circle2D, Polygon2D, Shape, Triangle2D};
pub use transform::Transform2D;
pub use vector::Vector2D;

mod color;
mod shape;
mod transform;
mod vector;

#[cfg(test)]
pub(crate) fn assert_approx(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() <= 1e-5 * expected.abs().max(1.0),
        "expected {}, got {}",
        expected,
        actual,
    );
}
