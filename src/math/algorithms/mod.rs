// src/math/algorithms/mod.rs

// Deklaration der Algorithmus-Kategorien
pub mod convex_hull;
pub mod intersection;
pub mod queries;
pub mod triangulation;

// Konvexe Hülle
pub use self::convex_hull::{ConvexHullComputer, graham_scan};

// Schnittpunkte
pub use self::intersection::intersection_point;

// Abfragen über Formen und Formsammlungen
pub use self::queries::{
    bounding_box, bounding_boxes_overlap, contains_point, distance_between_shapes,
    distance_to_point, find_all_collision_indices, find_all_collisions, find_highest_shape,
    height,
};

// Triangulation
pub use self::triangulation::{DelaunayTriangle, Edge, delaunay_triangulation, total_area};
