// src/math/algorithms/queries.rs

//! # Shape Queries
//!
//! Distances, bounding-box overlap, collision detection and ranking over
//! collections of [`Shape`] values. Every query dispatches through an
//! exhaustive `match` on the shape variant.

use crate::math::{
    geometry::{Circle, Polygon, Segment, Shape},
    types::{BoundingBox, Point},
    utils::constants::ON_SEGMENT_TOLERANCE,
};
use tracing::debug;

/// Distance from `point` to the boundary of `shape` (never negative).
///
/// - Segment: projection clamped to the segment.
/// - Triangle, rectangle, regular polygon: minimum over all boundary edges.
/// - Circle: `max(0, |point - center| - radius)`, zero inside the disc.
/// - Polygon: minimum distance to any *vertex*. Edges are ignored; callers
///   rely on this exact behaviour.
pub fn distance_to_point(shape: &Shape, point: Point) -> f64 {
    match shape {
        Shape::Segment(segment) => segment.distance_to_point(point),
        Shape::Triangle(triangle) => distance_to_closed_ring(&triangle.vertices(), point),
        Shape::Rectangle(rect) => distance_to_closed_ring(&rect.vertices(), point),
        Shape::RegularPolygon(polygon) => distance_to_closed_ring(&polygon.vertices(), point),
        Shape::Circle(circle) => (point.distance_to(circle.center) - circle.radius).max(0.0),
        Shape::Polygon(polygon) => distance_to_nearest_vertex(polygon, point),
    }
}

/// Minimum distance to the edges `v[i] -> v[i+1]`, wrapping around.
fn distance_to_closed_ring(vertices: &[Point], point: Point) -> f64 {
    let n = vertices.len();
    (0..n)
        .map(|i| Segment {
            start: vertices[i],
            end: vertices[(i + 1) % n],
        })
        .map(|edge| edge.distance_to_point(point))
        .fold(f64::MAX, f64::min)
}

fn distance_to_nearest_vertex(polygon: &Polygon, point: Point) -> f64 {
    polygon
        .vertices()
        .iter()
        .map(|v| point.distance_to(*v))
        .fold(f64::MAX, f64::min)
}

/// Bounding box of any shape.
pub fn bounding_box(shape: &Shape) -> BoundingBox {
    shape.bounding_box()
}

/// Maximum y reached by the shape.
pub fn height(shape: &Shape) -> f64 {
    shape.height()
}

/// Inclusive bounding-box overlap test. Symmetric in its arguments.
pub fn bounding_boxes_overlap(first: &Shape, second: &Shape) -> bool {
    first.bounding_box().overlaps(&second.bounding_box())
}

/// Distance between two shapes, defined only for circle–circle and
/// segment–segment. Every other combination yields `None`.
pub fn distance_between_shapes(first: &Shape, second: &Shape) -> Option<f64> {
    match (first, second) {
        (Shape::Circle(a), Shape::Circle(b)) => Some(circle_circle_distance(a, b)),
        (Shape::Segment(a), Shape::Segment(b)) => Some(segment_segment_distance(a, b)),
        _ => None,
    }
}

fn circle_circle_distance(a: &Circle, b: &Circle) -> f64 {
    (a.center.distance_to(b.center) - a.radius - b.radius).max(0.0)
}

/// Minimum of the four endpoint-to-segment distances. Crossing segments are
/// not detected here and keep their endpoint distance.
fn segment_segment_distance(a: &Segment, b: &Segment) -> f64 {
    [
        b.distance_to_point(a.start),
        b.distance_to_point(a.end),
        a.distance_to_point(b.start),
        a.distance_to_point(b.end),
    ]
    .into_iter()
    .fold(f64::MAX, f64::min)
}

/// Index pairs `(i, j)` with `i < j` whose bounding boxes overlap, in
/// forward order (outer `i` ascending, inner `j` ascending).
pub fn find_all_collision_indices(shapes: &[Shape]) -> Vec<(usize, usize)> {
    let boxes: Vec<BoundingBox> = shapes.iter().map(Shape::bounding_box).collect();
    let pairs: Vec<(usize, usize)> = (0..boxes.len())
        .flat_map(|i| ((i + 1)..boxes.len()).map(move |j| (i, j)))
        .filter(|&(i, j)| boxes[i].overlaps(&boxes[j]))
        .collect();

    debug!(
        "Bounding-box collision scan over {} shapes found {} pairs",
        shapes.len(),
        pairs.len()
    );
    pairs
}

/// All colliding shape pairs, ordered like [`find_all_collision_indices`].
pub fn find_all_collisions(shapes: &[Shape]) -> Vec<(Shape, Shape)> {
    find_all_collision_indices(shapes)
        .into_iter()
        .map(|(i, j)| (shapes[i].clone(), shapes[j].clone()))
        .collect()
}

/// Index of the tallest shape; ties resolve to the first occurrence.
pub fn find_highest_shape(shapes: &[Shape]) -> Option<usize> {
    shapes
        .iter()
        .map(Shape::height)
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (index, h)| match best {
            Some((_, best_height)) if h <= best_height => best,
            _ => Some((index, h)),
        })
        .map(|(index, _)| index)
}

/// Point-in-shape test, boundary inclusive for segment, triangle, rectangle
/// and circle; ray casting for regular and arbitrary polygons.
pub fn contains_point(shape: &Shape, point: Point) -> bool {
    match shape {
        Shape::Segment(segment) => {
            let line_vec = segment.end - segment.start;
            let point_vec = point - segment.start;
            if point_vec.cross(line_vec).abs() > ON_SEGMENT_TOLERANCE {
                return false;
            }
            let dot = point_vec.dot(line_vec);
            dot >= 0.0 && dot <= line_vec.length_squared()
        }
        Shape::Triangle(t) => {
            let s1 = (point - t.a).cross(t.b - t.a);
            let s2 = (point - t.b).cross(t.c - t.b);
            let s3 = (point - t.c).cross(t.a - t.c);
            let has_neg = s1 < 0.0 || s2 < 0.0 || s3 < 0.0;
            let has_pos = s1 > 0.0 || s2 > 0.0 || s3 > 0.0;
            !(has_neg && has_pos)
        }
        Shape::Rectangle(rect) => rect.bounding_box().contains_point(point),
        Shape::RegularPolygon(polygon) => ray_casting(&polygon.vertices(), point),
        Shape::Circle(circle) => point.distance_to(circle.center) <= circle.radius,
        Shape::Polygon(polygon) => ray_casting(polygon.vertices(), point),
    }
}

/// Even-odd rule along a horizontal ray towards +x.
fn ray_casting(vertices: &[Point], p: Point) -> bool {
    let n = vertices.len();
    let mut inside = false;
    for i in 0..n {
        let v1 = vertices[i];
        let v2 = vertices[(i + 1) % n];
        if (v1.y > p.y) != (v2.y > p.y)
            && p.x < (v2.x - v1.x) * (p.y - v1.y) / (v2.y - v1.y) + v1.x
        {
            inside = !inside;
        }
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::{Rectangle, RegularPolygon, Triangle};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn circle(x: f64, y: f64, r: f64) -> Shape {
        Circle::new(Point::new(x, y), r).unwrap().into()
    }

    fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Shape {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2))
            .unwrap()
            .into()
    }

    fn rectangle(x: f64, y: f64, w: f64, h: f64) -> Shape {
        Rectangle::new(Point::new(x, y), w, h).unwrap().into()
    }

    fn square_polygon() -> Shape {
        Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ])
        .unwrap()
        .into()
    }

    #[test]
    fn test_distance_to_segment() {
        let line = segment(0.0, 0.0, 2.0, 0.0);
        assert_relative_eq!(distance_to_point(&line, Point::new(1.0, 1.0)), 1.0);
        assert_relative_eq!(distance_to_point(&line, Point::new(3.0, 0.0)), 1.0);
        assert_eq!(distance_to_point(&line, Point::new(0.5, 0.0)), 0.0);
    }

    #[test]
    fn test_segment_distance_zero_only_on_segment() {
        let line = segment(0.0, 0.0, 4.0, 2.0);
        assert_eq!(distance_to_point(&line, Point::new(2.0, 1.0)), 0.0);
        // On the infinite line but outside [0, 1].
        assert!(distance_to_point(&line, Point::new(6.0, 3.0)) > 0.0);
        // Projection inside, but off the line.
        assert!(distance_to_point(&line, Point::new(2.0, 1.5)) > 0.0);
    }

    #[test]
    fn test_distance_to_circle_matches_formula() {
        let mut rng = StdRng::seed_from_u64(7);
        let c = circle(1.0, -2.0, 1.5);
        for _ in 0..200 {
            let p = Point::new(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0));
            let expected = (p.distance_to(Point::new(1.0, -2.0)) - 1.5).max(0.0);
            assert_eq!(distance_to_point(&c, p), expected);
        }
        assert_eq!(distance_to_point(&c, Point::new(1.5, -2.0)), 0.0);
    }

    #[test]
    fn test_distance_to_triangle_and_rectangle() {
        let tri: Shape = Triangle::new(Point::ZERO, Point::new(2.0, 0.0), Point::new(1.0, 2.0))
            .unwrap()
            .into();
        assert_relative_eq!(distance_to_point(&tri, Point::new(1.0, 3.0)), 1.0, epsilon = 1e-12);

        let rect = rectangle(1.0, 1.0, 2.0, 2.0);
        assert_relative_eq!(distance_to_point(&rect, Point::new(4.0, 2.0)), 1.0);
        assert_relative_eq!(distance_to_point(&rect, Point::new(2.0, 4.0)), 1.0);
        // Inside: distance to the nearest edge, not zero.
        assert_relative_eq!(distance_to_point(&rect, Point::new(2.0, 2.0)), 1.0);
    }

    #[test]
    fn test_distance_to_regular_polygon_uses_edges() {
        let square: Shape = RegularPolygon::new(Point::ZERO, 1.0, 4).unwrap().into();
        // Edge from (1, 0) to (0, 1): distance from the origin is 1/sqrt(2).
        assert_relative_eq!(
            distance_to_point(&square, Point::ZERO),
            std::f64::consts::FRAC_1_SQRT_2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_polygon_distance_uses_vertices_only() {
        let poly = square_polygon();
        assert_relative_eq!(
            distance_to_point(&poly, Point::new(3.0, 1.0)),
            2.0_f64.sqrt(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            distance_to_point(&poly, Point::new(1.0, 1.0)),
            2.0_f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let shapes = vec![
            circle(0.0, 0.0, 1.0),
            segment(-4.0, 0.0, 12.0, 0.0),
            rectangle(1.0, 1.0, 2.0, 2.0),
            rectangle(-5.0, -4.0, 3.0, 2.0),
            square_polygon(),
            RegularPolygon::new(Point::new(10.0, 2.0), 1.5, 6).unwrap().into(),
        ];
        for a in &shapes {
            for b in &shapes {
                assert_eq!(bounding_boxes_overlap(a, b), bounding_boxes_overlap(b, a));
            }
        }
    }

    #[test]
    fn test_distance_between_circles() {
        let d = distance_between_shapes(&circle(0.0, 0.0, 1.0), &circle(5.0, 0.0, 2.0));
        assert_eq!(d, Some(2.0));
        let overlapping = distance_between_shapes(&circle(0.0, 0.0, 2.0), &circle(1.0, 0.0, 2.0));
        assert_eq!(overlapping, Some(0.0));
    }

    #[test]
    fn test_distance_between_segments() {
        let a = segment(0.0, 0.0, 2.0, 0.0);
        let b = segment(1.0, 3.0, 1.0, 1.0);
        assert_abs_diff_eq!(distance_between_shapes(&a, &b).unwrap(), 1.0);
    }

    #[test]
    fn test_distance_between_unsupported_kinds_is_none() {
        assert_eq!(
            distance_between_shapes(&circle(0.0, 0.0, 1.0), &segment(0.0, 0.0, 1.0, 1.0)),
            None
        );
        assert_eq!(
            distance_between_shapes(&rectangle(0.0, 0.0, 1.0, 1.0), &rectangle(2.0, 0.0, 1.0, 1.0)),
            None
        );
    }

    #[test]
    fn test_collisions_degenerate_inputs() {
        assert!(find_all_collisions(&[]).is_empty());
        assert!(find_all_collisions(&[circle(0.0, 0.0, 1.0)]).is_empty());
    }

    #[test]
    fn test_collisions_single_pair() {
        let shapes = vec![circle(0.0, 0.0, 2.0), circle(1.0, 0.0, 2.0)];
        let collisions = find_all_collisions(&shapes);
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0], (shapes[0].clone(), shapes[1].clone()));
    }

    #[test]
    fn test_collisions_follow_forward_index_order() {
        let shapes = vec![
            circle(0.0, 0.0, 1.0),
            circle(0.5, 0.0, 1.0),
            circle(2.5, 0.0, 1.0),
            circle(5.0, 5.0, 1.0),
            rectangle(-0.5, -0.5, 1.0, 1.0),
        ];
        assert_eq!(
            find_all_collision_indices(&shapes),
            vec![(0, 1), (0, 4), (1, 2), (1, 4)]
        );
    }

    #[test]
    fn test_collisions_touching_edges_count() {
        let shapes = vec![rectangle(0.0, 0.0, 1.0, 1.0), rectangle(1.0, 0.0, 1.0, 1.0)];
        assert_eq!(find_all_collisions(&shapes).len(), 1);
    }

    #[test]
    fn test_highest_shape() {
        let shapes = vec![
            circle(0.0, 0.0, 1.0),
            rectangle(0.0, 0.0, 1.0, 3.0),
            segment(0.0, 0.0, 1.0, 2.0),
        ];
        assert_eq!(find_highest_shape(&shapes), Some(1));
        assert_eq!(find_highest_shape(&[]), None);
    }

    #[test]
    fn test_highest_shape_ties_resolve_to_first() {
        let shapes = vec![
            segment(0.0, 0.0, 1.0, 1.0),
            circle(5.0, 0.0, 3.0),
            rectangle(0.0, 0.0, 1.0, 3.0),
            segment(0.0, 3.0, 1.0, 0.0),
        ];
        assert_eq!(find_highest_shape(&shapes), Some(1));
    }

    #[test]
    fn test_contains_point() {
        let line = segment(0.0, 0.0, 2.0, 2.0);
        assert!(contains_point(&line, Point::new(1.0, 1.0)));
        assert!(!contains_point(&line, Point::new(3.0, 3.0)));
        assert!(!contains_point(&line, Point::new(1.0, 1.1)));

        let tri: Shape = Triangle::new(Point::ZERO, Point::new(2.0, 0.0), Point::new(1.0, 2.0))
            .unwrap()
            .into();
        assert!(contains_point(&tri, Point::new(1.0, 0.5)));
        assert!(contains_point(&tri, Point::new(1.0, 0.0)));
        assert!(!contains_point(&tri, Point::new(0.0, 2.0)));

        assert!(contains_point(&rectangle(0.0, 0.0, 1.0, 1.0), Point::new(1.0, 1.0)));
        assert!(contains_point(&circle(0.0, 0.0, 1.0), Point::new(1.0, 0.0)));
        assert!(!contains_point(&circle(0.0, 0.0, 1.0), Point::new(1.0, 0.1)));

        let hex: Shape = RegularPolygon::new(Point::ZERO, 1.0, 6).unwrap().into();
        assert!(contains_point(&hex, Point::new(0.1, 0.1)));
        assert!(!contains_point(&hex, Point::new(0.0, 0.95)));

        assert!(contains_point(&square_polygon(), Point::new(1.0, 1.0)));
        assert!(!contains_point(&square_polygon(), Point::new(3.0, 1.0)));
    }
}
