//! API for simple 2D game engine.

pub use vortex_ecs as ecs;

pub mod component;
pub mod config;
pub mod error;
pub mod frame;
