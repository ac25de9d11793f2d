// src/math/geometry/shape.rs

//! Geschlossener Summentyp über alle Formarten.
//!
//! Jede Auswertung läuft über ein vollständiges `match`; eine neue Variante
//! bricht die Kompilierung an jeder Verwendungsstelle, bis sie behandelt ist.

use crate::math::{
    geometry::{
        config::ApproximationConfig,
        primitives::{Circle, Polygon, Rectangle, RegularPolygon, Segment, Triangle},
    },
    types::{BoundingBox, Point},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag einer Formvariante, ohne Geometrie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Segment,
    Triangle,
    Rectangle,
    RegularPolygon,
    Circle,
    Polygon,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Segment => "segment",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::RegularPolygon => "regular polygon",
            ShapeKind::Circle => "circle",
            ShapeKind::Polygon => "polygon",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Segment(Segment),
    Triangle(Triangle),
    Rectangle(Rectangle),
    RegularPolygon(RegularPolygon),
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Segment(_) => ShapeKind::Segment,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::RegularPolygon(_) => ShapeKind::RegularPolygon,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// Achsenparallele Hülle der definierenden Geometrie.
    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Shape::Segment(s) => s.bounding_box(),
            Shape::Triangle(t) => t.bounding_box(),
            Shape::Rectangle(r) => r.bounding_box(),
            Shape::RegularPolygon(p) => p.bounding_box(),
            Shape::Circle(c) => c.bounding_box(),
            Shape::Polygon(p) => p.bounding_box(),
        }
    }

    /// Maximale y-Koordinate der Form (Rangkriterium für "höchste Form").
    pub fn height(&self) -> f64 {
        match self {
            Shape::Segment(s) => s.height(),
            Shape::Triangle(t) => t.height(),
            Shape::Rectangle(r) => r.top(),
            Shape::RegularPolygon(p) => p.height(),
            Shape::Circle(c) => c.height(),
            Shape::Polygon(p) => p.height(),
        }
    }

    /// Beschriftungspunkt für Renderer.
    pub fn center(&self) -> Point {
        match self {
            Shape::Segment(s) => s.midpoint(),
            Shape::Triangle(t) => t.centroid(),
            Shape::Rectangle(r) => r.center(),
            Shape::RegularPolygon(p) => p.center,
            Shape::Circle(c) => c.center,
            Shape::Polygon(p) => p.center(),
        }
    }

    /// Eckpunkte bzw. Polygon-Approximation (Kreis mit `config.circle_vertices`).
    pub fn vertices(&self, config: &ApproximationConfig) -> Vec<Point> {
        match self {
            Shape::Segment(s) => s.vertices().to_vec(),
            Shape::Triangle(t) => t.vertices().to_vec(),
            Shape::Rectangle(r) => r.vertices().to_vec(),
            Shape::RegularPolygon(p) => p.vertices(),
            Shape::Circle(c) => c.vertices(config.circle_vertices),
            Shape::Polygon(p) => p.vertices().to_vec(),
        }
    }

    /// Linienzug zum Zeichnen. Geschlossene Formen enden wieder am ersten Punkt,
    /// Kreise nutzen `config.circle_outline_segments`.
    pub fn outline(&self, config: &ApproximationConfig) -> Vec<Point> {
        let mut points = match self {
            Shape::Segment(s) => return s.vertices().to_vec(),
            Shape::Circle(c) => c.vertices(config.circle_outline_segments),
            Shape::Triangle(_)
            | Shape::Rectangle(_)
            | Shape::RegularPolygon(_)
            | Shape::Polygon(_) => self.vertices(config),
        };
        if let Some(&first) = points.first() {
            points.push(first);
        }
        points
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Segment(s) => s.fmt(f),
            Shape::Triangle(t) => t.fmt(f),
            Shape::Rectangle(r) => r.fmt(f),
            Shape::RegularPolygon(p) => p.fmt(f),
            Shape::Circle(c) => c.fmt(f),
            Shape::Polygon(p) => p.fmt(f),
        }
    }
}

impl From<Segment> for Shape {
    fn from(s: Segment) -> Self {
        Shape::Segment(s)
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Shape::Triangle(t)
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl From<RegularPolygon> for Shape {
    fn from(p: RegularPolygon) -> Self {
        Shape::RegularPolygon(p)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}
