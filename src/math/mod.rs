// src/math/mod.rs
pub mod algorithms;
pub mod error;
pub mod geometry;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        algorithms::*,
        error::{MathError, MathResult},
        geometry::{
            ApproximationConfig, Circle, Polygon, Rectangle, RegularPolygon, Segment, Shape,
            ShapeKind, Triangle, parse_shape, parse_shapes,
        },
        types::*,
    };
}
