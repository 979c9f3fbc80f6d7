//! Affine 2D transform component.

use ultraviolet::{Mat3, Vec2, Vec3};

/// Default width and height of the transform.
pub const DEFAULT_SIZE: f32 = 64.0;

/// Position, size, pivot, rotation and scale of the entity in 2D space.
///
/// Pivot is relative to the position of the entity. It defaults to the middle
/// of the size on construction, but does not follow later changes of the size.
///
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2D {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub pivot_x: f32,
    pub pivot_y: f32,
    /// Rotation in degrees, counter-clockwise.
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Transform2D {
    /// Creates new transform with pivot in the middle of given size,
    /// no rotation and unit scale.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            pivot_x: width / 2.0,
            pivot_y: height / 2.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Creates new transform of default size at given position.
    pub fn at(x: f32, y: f32) -> Self {
        Self::new(x, y, DEFAULT_SIZE, DEFAULT_SIZE)
    }

    pub fn with_pivot(mut self, pivot_x: f32, pivot_y: f32) -> Self {
        self.pivot_x = pivot_x;
        self.pivot_y = pivot_y;
        self
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_scale(mut self, scale_x: f32, scale_y: f32) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    /// Builder form of [`set_size`](Transform2D::set_size).
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.set_size(width, height);
        self
    }

    /// Changes the size, leaving the pivot untouched.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn pivot(&self) -> Vec2 {
        Vec2::new(self.pivot_x, self.pivot_y)
    }

    /// Homogeneous 3x3 transformation matrix (column-major, for column vectors).
    ///
    /// Point is moved so that the pivot is at the origin, scaled, rotated,
    /// moved back by the pivot and finally translated to the position.
    ///
    pub fn matrix(&self) -> Mat3 {
        let (sin, cos) = self.rotation.to_radians().sin_cos();

        let translation = translate(self.x, self.y);
        let pivot_back = translate(self.pivot_x, self.pivot_y);
        let rotation = Mat3::new(
            Vec3::new(cos, sin, 0.0),
            Vec3::new(-sin, cos, 0.0),
            Vec3::unit_z(),
        );
        let scale = Mat3::new(
            Vec3::new(self.scale_x, 0.0, 0.0),
            Vec3::new(0.0, self.scale_y, 0.0),
            Vec3::unit_z(),
        );
        let pivot_translation = translate(-self.pivot_x, -self.pivot_y);

        translation * pivot_back * rotation * scale * pivot_translation
    }

    /// Applies transformation matrix to the point.
    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        let point = self.matrix() * Vec3::new(point.x, point.y, 1.0);
        Vec2::new(point.x, point.y)
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::at(0.0, 0.0)
    }
}

fn translate(x: f32, y: f32) -> Mat3 {
    Mat3::new(Vec3::unit_x(), Vec3::unit_y(), Vec3::new(x, y, 1.0))
}
