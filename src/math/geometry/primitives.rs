// src/math/geometry/primitives.rs

//! Die sechs konkreten Formtypen. Jede Form kennt ihre Bounding Box, ihre Höhe
//! (maximale y-Koordinate), ihre Eckpunkte und ihren Beschriftungspunkt.

use crate::math::{
    error::{MathError, MathResult},
    geometry::ShapeKind,
    types::{BoundingBox, Point},
    utils::constants::TAU,
};
use serde::{Deserialize, Serialize};
use std::fmt;

fn require_finite(kind: ShapeKind, points: &[Point]) -> MathResult<()> {
    if points.iter().all(Point::is_finite) {
        Ok(())
    } else {
        Err(MathError::InvalidShape {
            kind,
            reason: "coordinates must be finite".to_string(),
        })
    }
}

fn require_positive(kind: ShapeKind, name: &str, value: f64) -> MathResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(MathError::InvalidShape {
            kind,
            reason: format!("{name} must be positive, got {value}"),
        })
    }
}

/// Punkte auf einem Kreis, beginnend bei Winkel 0, gegen den Uhrzeigersinn.
fn points_on_circle(center: Point, radius: f64, count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let angle = TAU * i as f64 / count as f64;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Strecke zwischen zwei Punkten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> MathResult<Self> {
        require_finite(ShapeKind::Segment, &[start, end])?;
        Ok(Self { start, end })
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    pub fn midpoint(&self) -> Point {
        (self.start + self.end) / 2.0
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.start, self.end)
    }

    pub fn height(&self) -> f64 {
        self.start.y.max(self.end.y)
    }

    pub fn vertices(&self) -> [Point; 2] {
        [self.start, self.end]
    }

    /// Abstand eines Punktes zur Strecke: Projektion, auf [0, 1] geklemmt.
    pub fn distance_to_point(&self, point: Point) -> f64 {
        let line_vec = self.end - self.start;
        let length_sq = line_vec.dot(line_vec);
        if length_sq == 0.0 {
            return point.distance_to(self.start);
        }

        let t = ((point - self.start).dot(line_vec) / length_sq).clamp(0.0, 1.0);
        point.distance_to(self.start + line_vec * t)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment({}, {})", self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> MathResult<Self> {
        require_finite(ShapeKind::Triangle, &[a, b, c])?;
        Ok(Self { a, b, c })
    }

    /// Fläche (immer nicht-negativ).
    pub fn area(&self) -> f64 {
        (self.b - self.a).cross(self.c - self.a).abs() / 2.0
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.a, self.b).union(&BoundingBox::from_points(self.c, self.c))
    }

    pub fn height(&self) -> f64 {
        self.a.y.max(self.b.y).max(self.c.y)
    }

    /// Schwerpunkt
    pub fn centroid(&self) -> Point {
        (self.a + self.b + self.c) / 3.0
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle({}, {}, {})", self.a, self.b, self.c)
    }
}

/// Achsenparalleles Rechteck, verankert an der unteren linken Ecke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub bottom_left: Point,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(bottom_left: Point, width: f64, height: f64) -> MathResult<Self> {
        require_finite(ShapeKind::Rectangle, &[bottom_left])?;
        require_positive(ShapeKind::Rectangle, "width", width)?;
        require_positive(ShapeKind::Rectangle, "height", height)?;
        Ok(Self {
            bottom_left,
            width,
            height,
        })
    }

    pub fn top_right(&self) -> Point {
        Point::new(
            self.bottom_left.x + self.width,
            self.bottom_left.y + self.height,
        )
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.bottom_left, self.top_right())
    }

    /// Oberkante, nicht die Ausdehnung.
    pub fn top(&self) -> f64 {
        self.bottom_left.y + self.height
    }

    pub fn center(&self) -> Point {
        self.bottom_left + Point::new(self.width, self.height) / 2.0
    }

    /// Ecken gegen den Uhrzeigersinn ab unten links.
    pub fn vertices(&self) -> [Point; 4] {
        let bl = self.bottom_left;
        let tr = self.top_right();
        [
            bl,
            Point::new(tr.x, bl.y),
            tr,
            Point::new(bl.x, tr.y),
        ]
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle(bottom_left={}, w={:.2}, h={:.2})",
            self.bottom_left, self.width, self.height
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegularPolygon {
    pub center: Point,
    pub radius: f64,
    pub sides: usize,
}

impl RegularPolygon {
    /// Obergrenze für die Seitenzahl; `vertices()` materialisiert jede Ecke.
    pub const MAX_SIDES: usize = 1 << 16;

    pub fn new(center: Point, radius: f64, sides: usize) -> MathResult<Self> {
        require_finite(ShapeKind::RegularPolygon, &[center])?;
        require_positive(ShapeKind::RegularPolygon, "radius", radius)?;
        if !(3..=Self::MAX_SIDES).contains(&sides) {
            return Err(MathError::InvalidShape {
                kind: ShapeKind::RegularPolygon,
                reason: format!(
                    "needs between 3 and {} sides, got {sides}",
                    Self::MAX_SIDES
                ),
            });
        }
        Ok(Self {
            center,
            radius,
            sides,
        })
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_center_radius(self.center, self.radius)
    }

    pub fn height(&self) -> f64 {
        self.center.y + self.radius
    }

    /// Ecken auf dem Umkreis, erste Ecke bei Winkel 0.
    pub fn vertices(&self) -> Vec<Point> {
        points_on_circle(self.center, self.radius, self.sides)
    }
}

impl fmt::Display for RegularPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RegularPolygon(center={}, r={:.2}, sides={})",
            self.center, self.radius, self.sides
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> MathResult<Self> {
        require_finite(ShapeKind::Circle, &[center])?;
        require_positive(ShapeKind::Circle, "radius", radius)?;
        Ok(Self { center, radius })
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_center_radius(self.center, self.radius)
    }

    pub fn height(&self) -> f64 {
        self.center.y + self.radius
    }

    /// Polygon-Approximation mit `count` Eckpunkten.
    pub fn vertices(&self, count: usize) -> Vec<Point> {
        points_on_circle(self.center, self.radius, count)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(center={}, r={:.2})", self.center, self.radius)
    }
}

/// Beliebiges Polygon aus einer geordneten Eckpunktliste (mindestens ein Punkt).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolygonRepr", into = "PolygonRepr")]
pub struct Polygon {
    points: Vec<Point>,
    bounding_box: BoundingBox,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> MathResult<Self> {
        require_finite(ShapeKind::Polygon, &points)?;
        let bounding_box =
            BoundingBox::from_points_iter(points.iter().copied()).ok_or_else(|| {
                MathError::InvalidShape {
                    kind: ShapeKind::Polygon,
                    reason: "needs at least one vertex".to_string(),
                }
            })?;

        Ok(Self {
            points,
            bounding_box,
        })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    pub fn height(&self) -> f64 {
        self.bounding_box.max_y
    }

    pub fn center(&self) -> Point {
        self.bounding_box.center()
    }
}

/// Serialisierte Form; die Bounding Box wird beim Laden neu berechnet.
#[derive(Serialize, Deserialize)]
struct PolygonRepr {
    vertices: Vec<Point>,
}

impl TryFrom<PolygonRepr> for Polygon {
    type Error = MathError;

    fn try_from(repr: PolygonRepr) -> MathResult<Self> {
        Self::new(repr.vertices)
    }
}

impl From<Polygon> for PolygonRepr {
    fn from(polygon: Polygon) -> Self {
        Self {
            vertices: polygon.points,
        }
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon[{} points]: [", self.points.len())?;
        for p in &self.points {
            write!(f, "{p} ")?;
        }
        write!(f, "]")
    }
}
