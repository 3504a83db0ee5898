//! Error types for the Nova3D math library
//!
//! Only one failure kind exists in this crate: a caller handed an
//! operation an argument it cannot work with (zero-length rotation axis,
//! inverted or negative projection depth range). Degenerate inputs that
//! occur naturally during per-frame updates (coincident look-at points,
//! zero-norm quaternions) are absorbed as defined no-ops instead and
//! never surface here.

use std::fmt;

/// Result type for Nova3D math operations
pub type Result<T> = std::result::Result<T, Error>;

/// Nova3D math errors
#[derive(Debug, Clone)]
pub enum Error {
    /// An argument violated an operation's preconditions
    InvalidArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
