// src/math/algorithms/intersection.rs

//! # Intersection Engine
//!
//! A single entry point, [`intersection_point`], dispatches on the ordered
//! pair of shape kinds. Supported pairs are segment–segment, segment–circle
//! (either order) and circle–circle. Every other pair is reported as
//! [`MathError::UnsupportedIntersection`], which callers must keep apart from
//! `Ok(None)` ("computed, no intersection").

use crate::math::{
    error::{MathError, MathResult},
    geometry::{Circle, Segment, Shape},
    types::Point,
    utils::{
        comparison::{in_unit_interval, nearly_equal, nearly_zero},
        constants::EPSILON,
    },
};
use tracing::warn;

/// Intersection point of two shapes, if one exists.
///
/// # Errors
/// Returns [`MathError::UnsupportedIntersection`] for kind pairs without an
/// intersection rule (e.g. triangle–triangle, segment–polygon).
pub fn intersection_point(first: &Shape, second: &Shape) -> MathResult<Option<Point>> {
    match (first, second) {
        (Shape::Segment(a), Shape::Segment(b)) => Ok(segment_segment(a, b)),
        (Shape::Segment(segment), Shape::Circle(circle))
        | (Shape::Circle(circle), Shape::Segment(segment)) => Ok(segment_circle(segment, circle)),
        (Shape::Circle(a), Shape::Circle(b)) => Ok(circle_circle(a, b)),
        _ => {
            warn!(
                "Intersection requested for unsupported pair {} / {}",
                first.kind(),
                second.kind()
            );
            Err(MathError::UnsupportedIntersection {
                first: first.kind(),
                second: second.kind(),
            })
        }
    }
}

/// Parametric intersection `start1 + r*t = start2 + s*u`. Parallel and
/// coincident segments have no single intersection point and yield `None`.
pub fn segment_segment(first: &Segment, second: &Segment) -> Option<Point> {
    let r = first.end - first.start;
    let s = second.end - second.start;
    let w = second.start - first.start;

    let r_cross_s = r.cross(s);
    if nearly_zero(r_cross_s) {
        return None;
    }

    let t = w.cross(s) / r_cross_s;
    let u = w.cross(r) / r_cross_s;

    (in_unit_interval(t) && in_unit_interval(u)).then(|| first.start + r * t)
}

/// First intersection of the segment with the circle outline, walking from
/// `segment.start` towards `segment.end`.
pub fn segment_circle(segment: &Segment, circle: &Circle) -> Option<Point> {
    let d = segment.end - segment.start;
    let f = segment.start - circle.center;
    let radius_sq = circle.radius * circle.radius;

    let a = d.dot(d);
    if nearly_zero(a) {
        // Degenerate segment: only its start can lie on the outline.
        let on_outline = nearly_equal(f.dot(f), radius_sq);
        return on_outline.then_some(segment.start);
    }

    let b = 2.0 * f.dot(d);
    let c = f.dot(f) - radius_sq;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < -EPSILON {
        return None;
    }

    let at = |t: f64| in_unit_interval(t).then(|| segment.start + d * t);

    if discriminant.abs() <= EPSILON {
        return at(-b / (2.0 * a));
    }

    let sqrt_d = discriminant.sqrt();
    let t1 = (-b - sqrt_d) / (2.0 * a);
    let t2 = (-b + sqrt_d) / (2.0 * a);
    at(t1).or_else(|| at(t2))
}

/// One intersection point of two circle outlines.
///
/// With `ex` the unit vector between the centers and `ey = (-ex.y, ex.x)`,
/// the returned point is `c1 + ex*a + ey*h`, i.e. the branch to the left of
/// the line from the first center to the second.
pub fn circle_circle(first: &Circle, second: &Circle) -> Option<Point> {
    let d = second.center - first.center;
    let dist = d.length();
    let (r1, r2) = (first.radius, second.radius);

    if nearly_zero(dist) {
        return None;
    }
    if dist > r1 + r2 + EPSILON {
        return None;
    }
    if dist + r1.min(r2) < r1.max(r2) - EPSILON {
        return None;
    }

    let a = (r1 * r1 - r2 * r2 + dist * dist) / (2.0 * dist);
    let h_sq = r1 * r1 - a * a;
    if h_sq < -EPSILON {
        return None;
    }
    let h = h_sq.max(0.0).sqrt();

    let ex = d / dist;
    let ey = Point::new(-ex.y, ex.x);
    Some(first.center + ex * a + ey * h)
}
