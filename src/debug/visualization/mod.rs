// src/debug/visualization/mod.rs
pub mod svg;

pub use self::svg::{write_shapes_svg, write_triangles_svg};
