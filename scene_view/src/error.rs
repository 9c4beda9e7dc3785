//! Error types for the scene view core
//!
//! The view computations themselves have no error channel: degenerate input
//! produces degenerate (IEEE-754) output. Errors only come out of the
//! validating constructors and setters of the reference camera.

use std::fmt;

/// Result type for scene view operations
pub type Result<T> = std::result::Result<T, Error>;

/// Scene view errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Camera parameters out of range (fov, aspect, clip distances, orientation)
    InvalidCamera(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCamera(msg) => write!(f, "Invalid camera: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
