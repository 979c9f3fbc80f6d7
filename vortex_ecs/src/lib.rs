//! Entity Component System (ECS) utilities for game engine.

pub use component::{Component, ComponentManager, ComponentStorage};
pub use entity::Entity;
pub use query::Signature;
pub use registry::Registry;

mod component;
mod entity;
mod query;
mod registry;
