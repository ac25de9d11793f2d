// src/math/algorithms/convex_hull.rs

//! # Convex Hull Module
//!
//! Graham Scan over a 2D point cloud. The result is the hull boundary in
//! counter-clockwise order, starting at the lowest (then leftmost) point and
//! without repeating it at the end.
//!
//! The input slice is used as scratch space: the pivot is swapped to the front
//! and the remaining points are sorted by polar angle in place. Callers that
//! need the original order must pass a copy.
//!
//! Degenerate clouds are not rejected. If all points are collinear the result
//! is the two extreme points; if all points coincide it is that point twice.

use crate::math::{
    error::{MathError, MathResult},
    types::Point,
    utils::constants,
};
use std::cmp::Ordering;
use tracing::debug;

/// Computes convex hulls with the Graham Scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvexHullComputer {
    /// Cross products below this magnitude count as "same polar angle".
    tolerance: f64,
}

impl Default for ConvexHullComputer {
    /// Default tolerance: `constants::HULL_ANGLE_TOLERANCE`.
    fn default() -> Self {
        Self {
            tolerance: constants::HULL_ANGLE_TOLERANCE,
        }
    }
}

impl ConvexHullComputer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the collinearity tolerance used while sorting. Negative values clamp to zero.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.max(0.0);
        self
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Computes the hull of `points`, reordering the slice in place.
    ///
    /// Liefert für kollineare oder deckungsgleiche Eingaben weniger als 3 Punkte.
    ///
    /// # Errors
    /// [`MathError::InsufficientPoints`] if fewer than 3 points are supplied.
    pub fn compute_hull_points(&self, points: &mut [Point]) -> MathResult<Vec<Point>> {
        if points.len() < 3 {
            return Err(MathError::InsufficientPoints {
                operation: "convex hull",
                expected: 3,
                actual: points.len(),
            });
        }

        // 1. Pivot: lowest y, ties broken by lowest x.
        let mut min_idx = 0;
        for i in 1..points.len() {
            let (p, m) = (points[i], points[min_idx]);
            if p.y < m.y || (p.y == m.y && p.x < m.x) {
                min_idx = i;
            }
        }
        points.swap(0, min_idx);
        let pivot = points[0];

        // 2. Polar angle around the pivot; equal angles sorted by distance, nearest first.
        points[1..].sort_by(|a, b| self.polar_order(pivot, *a, *b));

        // 3. Sweep, popping while the last two stack points and the candidate
        //    do not make a strict left turn.
        let mut hull: Vec<Point> = Vec::with_capacity(points.len());
        for &candidate in points.iter() {
            while let [.., next_to_top, top] = hull.as_slice() {
                if Self::orientation(*next_to_top, *top, candidate) > 0.0 {
                    break;
                }
                hull.pop();
            }
            hull.push(candidate);
        }

        debug!(
            "Graham scan reduced {} points to {} hull vertices",
            points.len(),
            hull.len()
        );
        Ok(hull)
    }

    fn polar_order(&self, pivot: Point, a: Point, b: Point) -> Ordering {
        let cross = (a - pivot).cross(b - pivot);
        if cross.abs() < self.tolerance {
            pivot.distance_to(a).total_cmp(&pivot.distance_to(b))
        } else if cross > 0.0 {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    /// Orientation of the triplet `(p, q, r)`:
    /// - `> 0`: counter-clockwise (left) turn
    /// - `< 0`: clockwise (right) turn
    /// - `= 0`: collinear
    #[inline]
    fn orientation(p: Point, q: Point, r: Point) -> f64 {
        (q - p).cross(r - q)
    }
}

/// Graham Scan with the default tolerance. See [`ConvexHullComputer::compute_hull_points`].
pub fn graham_scan(points: &mut [Point]) -> MathResult<Vec<Point>> {
    ConvexHullComputer::default().compute_hull_points(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{ConvexHull, MultiPoint};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn signed_area(ring: &[Point]) -> f64 {
        let n = ring.len();
        (0..n)
            .map(|i| ring[i].cross(ring[(i + 1) % n]))
            .sum::<f64>()
            / 2.0
    }

    #[test]
    fn test_square_with_interior_point() {
        let mut points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(0.5, 0.5),
        ];
        let hull = graham_scan(&mut points).unwrap();
        assert_eq!(
            hull,
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_too_few_points() {
        let mut points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let err = graham_scan(&mut points).unwrap_err();
        assert_eq!(
            err,
            MathError::InsufficientPoints {
                operation: "convex hull",
                expected: 3,
                actual: 2,
            }
        );
        assert!(err.to_string().contains("at least 3"));
    }

    #[test]
    fn test_input_is_reordered_in_place() {
        let mut points = vec![
            Point::new(2.0, 2.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, -1.0),
            Point::new(3.0, 0.0),
        ];
        graham_scan(&mut points).unwrap();
        assert_eq!(points[0], Point::new(1.0, -1.0));
    }

    #[test]
    fn test_pivot_tie_breaks_on_lowest_x() {
        let mut points = vec![
            Point::new(3.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 2.0),
        ];
        let hull = graham_scan(&mut points).unwrap();
        assert_eq!(hull[0], Point::new(1.0, 0.0));
        assert_eq!(hull.len(), 3);
    }

    #[test]
    fn test_collinear_boundary_points_are_dropped() {
        let mut points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 2.0),
        ];
        let hull = graham_scan(&mut points).unwrap();
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&Point::new(1.0, 0.0)));
        assert!(!hull.contains(&Point::new(1.0, 1.0)));
    }

    #[test]
    fn test_degenerate_clouds_give_short_hulls() {
        let mut collinear = vec![
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 0.0),
        ];
        assert_eq!(
            graham_scan(&mut collinear).unwrap(),
            vec![Point::new(0.0, 0.0), Point::new(2.0, 2.0)]
        );

        let mut coincident = vec![Point::ZERO; 4];
        assert_eq!(graham_scan(&mut coincident).unwrap(), vec![Point::ZERO, Point::ZERO]);
    }

    #[test]
    fn test_hull_is_counter_clockwise_and_encloses_input() {
        let mut rng = StdRng::seed_from_u64(42);
        let original: Vec<Point> = (0..200)
            .map(|_| Point::new(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0)))
            .collect();
        let mut points = original.clone();
        let hull = graham_scan(&mut points).unwrap();

        assert!(signed_area(&hull) > 0.0);
        let n = hull.len();
        for p in &original {
            for i in 0..n {
                let (a, b) = (hull[i], hull[(i + 1) % n]);
                assert!((b - a).cross(*p - a) >= -1e-9, "{p} lies outside hull edge {a}-{b}");
            }
        }
    }

    #[test]
    fn test_matches_geo_convex_hull() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in [3, 10, 50, 500] {
            let mut points: Vec<Point> = (0..size)
                .map(|_| Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
                .collect();
            let multi: MultiPoint<f64> = points.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>().into();
            let reference = multi.convex_hull();
            let reference_coords = &reference.exterior().0;

            let hull = graham_scan(&mut points).unwrap();
            assert_eq!(hull.len(), reference_coords.len() - 1);
            for p in &hull {
                assert!(
                    reference_coords.iter().any(|c| c.x == p.x && c.y == p.y),
                    "{p} is not a geo hull vertex"
                );
            }
        }
    }

    #[test]
    fn test_custom_tolerance_is_clamped() {
        let computer = ConvexHullComputer::new().with_tolerance(-1.0);
        assert_eq!(computer.tolerance(), 0.0);
        assert_eq!(
            ConvexHullComputer::default().tolerance(),
            constants::HULL_ANGLE_TOLERANCE
        );
    }
}
