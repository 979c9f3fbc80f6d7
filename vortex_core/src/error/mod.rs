//! Utilities for game engine error handling.

use thiserror::Error;

/// Result of any operation which can return an error.
pub type Result<T> = std::result::Result<T, Error>;

/// General error type of game engine components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Value has wrong textual or structural format.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Argument does not satisfy requirements of the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
