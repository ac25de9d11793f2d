// src/lib.rs

//! Planar computational geometry: a closed catalogue of shapes, queries and
//! intersections over them, Graham Scan convex hulls and Bowyer–Watson
//! Delaunay triangulation.

pub mod debug;
pub mod math;
