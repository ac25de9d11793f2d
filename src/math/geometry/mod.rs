// src/math/geometry/mod.rs

// Deklaration der Geometriemodule
pub mod config;
pub mod parser;
pub mod primitives;
pub mod shape;

// Re-Exporte für einen schnellen Zugriff auf die Kern-Geometrietypen,
// falls man nicht das gesamte `math::prelude` importieren möchte.
pub use self::config::ApproximationConfig;
pub use self::parser::{parse_shape, parse_shapes};
pub use self::primitives::{Circle, Polygon, Rectangle, RegularPolygon, Segment, Triangle};
pub use self::shape::{Shape, ShapeKind};
