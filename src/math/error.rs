// src/math/error.rs
use crate::math::geometry::ShapeKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient points for {operation}: expected at least {expected}, got {actual}")]
    InsufficientPoints {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Intersection not supported for {first} and {second}")]
    UnsupportedIntersection { first: ShapeKind, second: ShapeKind },

    #[error("Invalid {kind}: {reason}")]
    InvalidShape { kind: ShapeKind, reason: String },

    #[error("Cannot parse shape '{fragment}': {reason}")]
    Parse { fragment: String, reason: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

pub type MathResult<T> = Result<T, MathError>;
