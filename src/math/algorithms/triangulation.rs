// src/math/algorithms/triangulation.rs

use crate::math::{
    error::{MathError, MathResult},
    geometry::{Shape, Triangle},
    types::{BoundingBox, Point},
    utils::{comparison::nearly_zero, constants::EPSILON},
};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};
use tracing::debug;

/// Skalierung des Super-Dreiecks relativ zur größten Ausdehnung der Punktwolke.
const SUPER_TRIANGLE_SCALE: f64 = 20.0;

/// Dreieck einer Delaunay-Triangulation, definiert durch drei 2D-Punkte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DelaunayTriangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl DelaunayTriangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// Doppelte vorzeichenbehaftete Fläche (positiv für CCW).
    fn signed_area_doubled(&self) -> f64 {
        (self.b - self.a).cross(self.c - self.a)
    }

    pub fn area(&self) -> f64 {
        0.5 * self.signed_area_doubled().abs()
    }

    /// Umkreismittelpunkt. Für (nahezu) kollineare Punkte wird der Schwerpunkt
    /// zurückgegeben, damit der Umkreistest definiert bleibt.
    pub fn circumcenter(&self) -> Point {
        let (a, b, c) = (self.a, self.b, self.c);
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        if nearly_zero(d) {
            return (a + b + c) / 3.0;
        }

        let a_sq = a.length_squared();
        let b_sq = b.length_squared();
        let c_sq = c.length_squared();

        let ux = (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y)) / d;
        let uy = (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x)) / d;
        Point::new(ux, uy)
    }

    pub fn circumradius(&self) -> f64 {
        self.circumcenter().distance_to(self.a)
    }

    /// Liegt `point` im Umkreis oder auf ihm (Toleranz `EPSILON`)?
    pub fn circumcircle_contains(&self, point: Point) -> bool {
        let center = self.circumcenter();
        center.distance_to(point) <= center.distance_to(self.a) + EPSILON
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.b, self.c),
            Edge::new(self.c, self.a),
        ]
    }

    /// Zwei Dreiecke teilen eine Kante, wenn genau zwei Eckpunkte übereinstimmen.
    pub fn shares_edge(&self, other: &DelaunayTriangle) -> bool {
        let shared = self
            .vertices()
            .iter()
            .filter(|p| other.vertices().iter().any(|q| p.approx_eq(*q, EPSILON)))
            .count();
        shared == 2
    }

    pub fn has_vertex(&self, point: Point) -> bool {
        self.vertices().iter().any(|v| v.approx_eq(point, EPSILON))
    }

    /// Verpackt das Dreieck als [`Shape`] für Renderer und Abfragen.
    pub fn to_shape(&self) -> MathResult<Shape> {
        Ok(Triangle::new(self.a, self.b, self.c)?.into())
    }
}

impl fmt::Display for DelaunayTriangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DelaunayTriangle({}, {}, {})", self.a, self.b, self.c)
    }
}

/// Ungerichtete Kante; der lexikographisch kleinere Punkt steht vorne, damit
/// dieselbe Kante zweier Nachbardreiecke gleich verglichen wird.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub p1: Point,
    pub p2: Point,
}

impl Edge {
    pub fn new(p1: Point, p2: Point) -> Self {
        if p1.lexicographic_cmp(&p2) == Ordering::Greater {
            Self { p1: p2, p2: p1 }
        } else {
            Self { p1, p2 }
        }
    }

    fn ordering(&self, other: &Edge) -> Ordering {
        self.p1
            .lexicographic_cmp(&other.p1)
            .then_with(|| self.p2.lexicographic_cmp(&other.p2))
    }
}

/// Gleichheit mit Toleranz `EPSILON` auf beiden Endpunkten.
impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.p1.approx_eq(other.p1, EPSILON) && self.p2.approx_eq(other.p2, EPSILON)
    }
}

/// Bowyer–Watson Delaunay-Triangulation einer Punktmenge.
///
/// Punkte, die (innerhalb von `EPSILON`) bereits eingefügt wurden, werden
/// übersprungen. Liegen alle Punkte auf einer Geraden, ist das Ergebnis leer.
///
/// # Errors
/// [`MathError::InsufficientPoints`] bei weniger als 3 Punkten.
pub fn delaunay_triangulation(points: &[Point]) -> MathResult<Vec<DelaunayTriangle>> {
    let insufficient = || MathError::InsufficientPoints {
        operation: "triangulation",
        expected: 3,
        actual: points.len(),
    };
    if points.len() < 3 {
        return Err(insufficient());
    }
    let bounds = BoundingBox::from_points_iter(points.iter().copied()).ok_or_else(insufficient)?;

    let super_vertices = super_triangle_vertices(&bounds);
    let [s1, s2, s3] = super_vertices;
    debug!("Super-triangle for {} points: {s1}, {s2}, {s3}", points.len());

    let mut triangles = vec![DelaunayTriangle::new(s1, s2, s3)];
    let mut inserted: Vec<Point> = Vec::with_capacity(points.len());

    for &point in points {
        if inserted.iter().any(|p| p.approx_eq(point, EPSILON)) {
            debug!("Skipping duplicate point {point}");
            continue;
        }
        inserted.push(point);

        let (bad, good): (Vec<_>, Vec<_>) = triangles
            .into_iter()
            .partition(|t| t.circumcircle_contains(point));

        // Kanten, die genau einmal vorkommen, bilden den Rand der Höhle.
        let mut cavity: Vec<Edge> = Vec::new();
        for edge in bad.iter().flat_map(DelaunayTriangle::edges) {
            match cavity.iter().position(|e| *e == edge) {
                Some(index) => {
                    cavity.remove(index);
                }
                None => cavity.push(edge),
            }
        }
        cavity.sort_by(Edge::ordering);

        triangles = good;
        triangles.extend(
            cavity
                .into_iter()
                .map(|edge| DelaunayTriangle::new(edge.p1, edge.p2, point)),
        );
    }

    let before = triangles.len();
    triangles.retain(|t| !super_vertices.iter().any(|s| t.has_vertex(*s)));
    debug!(
        "Delaunay triangulation: {} triangles ({} removed with the super-triangle)",
        triangles.len(),
        before - triangles.len()
    );

    Ok(triangles)
}

/// Ecken eines Dreiecks, das die Punktwolke großzügig umschließt.
fn super_triangle_vertices(bounds: &BoundingBox) -> [Point; 3] {
    let extent = bounds.width().max(bounds.height());
    // Ohne Ausdehnung (ein einziger Punkt) trotzdem ein echtes Dreieck bauen.
    let d = if nearly_zero(extent) { 1.0 } else { extent };
    let center = bounds.center();
    [
        Point::new(center.x - SUPER_TRIANGLE_SCALE * d, center.y - d),
        Point::new(center.x, center.y + SUPER_TRIANGLE_SCALE * d),
        Point::new(center.x + SUPER_TRIANGLE_SCALE * d, center.y - d),
    ]
}

/// Gesamtfläche aller Dreiecke einer Triangulation.
pub fn total_area(triangles: &[DelaunayTriangle]) -> f64 {
    triangles.iter().map(DelaunayTriangle::area).sum()
}
