//! Error types for the Galaxy2D camera
//!
//! The camera itself never fails: every transform is plain arithmetic and
//! degenerate input silently yields Inf/NaN. These errors are only produced
//! by the explicit validation entry points (`Camera2D::validate`,
//! `Camera2D::try_from_desc`).

use std::fmt;

/// Result type for Galaxy2D camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy2D camera errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Screen rectangle or depth range has zero (or non-finite) extent
    DegenerateBounds(String),

    /// Camera transform cannot be inverted (zero or non-finite scale)
    SingularTransform(String),

    /// Parameter outside its accepted domain
    InvalidParameter(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegenerateBounds(msg) => write!(f, "Degenerate bounds: {}", msg),
            Error::SingularTransform(msg) => write!(f, "Singular transform: {}", msg),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
