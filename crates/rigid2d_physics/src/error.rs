//! Body construction errors
//!
//! Invalid bodies are rejected when they are added to a world, never while the
//! simulation is running.

use std::fmt;

/// Error type for body configuration
#[derive(Debug, Clone, PartialEq)]
pub enum BodyError {
    /// Shape kind name that is neither a rectangle nor a circle
    UnknownShape(String),
    /// Width or height is zero, negative or not finite
    NonPositiveSize { width: f32, height: f32 },
    /// Explicit mass that is zero, negative or not finite
    NonPositiveMass(f32),
    /// A field that must be finite is NaN or infinite
    NonFinite(&'static str),
}

impl fmt::Display for BodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyError::UnknownShape(name) => {
                write!(f, "\"{}\" is not a valid shape kind (\"rect\" or \"circle\")", name)
            }
            BodyError::NonPositiveSize { width, height } => {
                write!(f, "Body size must be positive, got {}x{}", width, height)
            }
            BodyError::NonPositiveMass(mass) => {
                write!(f, "Body mass must be positive, got {}", mass)
            }
            BodyError::NonFinite(field) => write!(f, "Body {} must be finite", field),
        }
    }
}

impl std::error::Error for BodyError {}
