//! Utilities for *queries* in ECS.

pub use signature::Signature;

mod signature;
