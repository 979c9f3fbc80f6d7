//! Utilities which prepare entities of the scene for drawing.
//!
//! Drawing itself is done by the window owner: this module only reads
//! the registry, it never changes it.

use palette::{Srgb, Srgba};
use ultraviolet::Mat3;

use crate::component::{Color, Transform2D};
use crate::ecs::{Entity, Registry};

/// Data needed to draw one game object.
#[derive(Debug, Copy, Clone)]
pub struct ObjectDraw {
    /// Entity which is drawn.
    pub entity: Entity,
    /// Model matrix of the object.
    pub matrix: Mat3,
    /// Normalized color of the object.
    pub color: Srgba,
}

/// Data needed to draw the whole frame.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Color which fills the frame before drawing objects.
    pub clear_color: Srgb,
    /// Game objects in order of entity creation.
    pub objects: Vec<ObjectDraw>,
}

impl Frame {
    /// Collects all entities which have both transform and color.
    pub fn collect(registry: &Registry, background: &Color) -> Self {
        let objects: Vec<_> = registry
            .query::<(Transform2D, Color)>()
            .into_iter()
            .filter_map(|entity| {
                let transform = registry.get_component::<Transform2D>(entity)?;
                let color = registry.get_component::<Color>(entity)?.to_clear_color();
                Some(ObjectDraw {
                    entity,
                    matrix: transform.matrix(),
                    color: Srgba::new(color.red, color.green, color.blue, 1.0),
                })
            })
            .collect();
        log::trace!("collected {} objects to draw", objects.len());
        Self {
            clear_color: background.to_clear_color(),
            objects,
        }
    }
}
