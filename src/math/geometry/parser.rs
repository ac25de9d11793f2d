// src/math/geometry/parser.rs

//! Textformat für Formen: `;`-getrennte Datensätze `<name> <zahlen...>`.
//!
//! ```text
//! circle cx cy r
//! line x1 y1 x2 y2
//! triangle x1 y1 x2 y2 x3 y3
//! rectangle x y w h
//! polygon cx cy r sides      (reguläres Polygon)
//! poly x1 y1 x2 y2 ...       (beliebiges Polygon)
//! ```

use crate::math::{
    error::{MathError, MathResult},
    geometry::{
        primitives::{Circle, Polygon, Rectangle, RegularPolygon, Segment, Triangle},
        shape::Shape,
    },
    types::Point,
};
use tracing::{debug, warn};

/// Liest alle gültigen Datensätze; ungültige werden übersprungen und geloggt.
pub fn parse_shapes(input: &str) -> Vec<Shape> {
    let shapes: Vec<Shape> = input
        .split(';')
        .map(str::trim)
        .filter(|record| !record.is_empty())
        .filter_map(|record| match parse_shape(record) {
            Ok(shape) => Some(shape),
            Err(err) => {
                warn!("Skipping shape record: {err}");
                None
            }
        })
        .collect();

    debug!("Parsed {} shapes", shapes.len());
    shapes
}

/// Liest einen einzelnen Datensatz.
pub fn parse_shape(record: &str) -> MathResult<Shape> {
    let mut tokens = record.split_whitespace();
    let name = tokens.next().ok_or_else(|| parse_error(record, "empty record"))?;
    let values = tokens
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| parse_error(record, &format!("'{token}' is not a number")))
        })
        .collect::<MathResult<Vec<f64>>>()?;

    let shape: Shape = match name {
        "circle" => {
            let [cx, cy, r] = exact_arity(record, &values)?;
            Circle::new(Point::new(cx, cy), r)?.into()
        }
        "line" => {
            let [x1, y1, x2, y2] = exact_arity(record, &values)?;
            Segment::new(Point::new(x1, y1), Point::new(x2, y2))?.into()
        }
        "triangle" => {
            let [x1, y1, x2, y2, x3, y3] = exact_arity(record, &values)?;
            Triangle::new(Point::new(x1, y1), Point::new(x2, y2), Point::new(x3, y3))?.into()
        }
        "rectangle" => {
            let [x, y, w, h] = exact_arity(record, &values)?;
            Rectangle::new(Point::new(x, y), w, h)?.into()
        }
        "polygon" => {
            let [cx, cy, r, sides] = exact_arity(record, &values)?;
            if sides.fract() != 0.0 || sides < 0.0 {
                return Err(parse_error(record, "side count must be a whole number"));
            }
            if sides > RegularPolygon::MAX_SIDES as f64 {
                return Err(parse_error(
                    record,
                    &format!("side count exceeds {}", RegularPolygon::MAX_SIDES),
                ));
            }
            RegularPolygon::new(Point::new(cx, cy), r, sides as usize)?.into()
        }
        "poly" => {
            if values.is_empty() || values.len() % 2 != 0 {
                return Err(parse_error(record, "expected coordinate pairs"));
            }
            let points = values
                .chunks_exact(2)
                .map(|pair| Point::new(pair[0], pair[1]))
                .collect();
            Polygon::new(points)?.into()
        }
        other => return Err(parse_error(record, &format!("unknown shape '{other}'"))),
    };

    Ok(shape)
}

fn exact_arity<const N: usize>(record: &str, values: &[f64]) -> MathResult<[f64; N]> {
    values.try_into().map_err(|_| {
        parse_error(
            record,
            &format!("expected {N} numbers, got {}", values.len()),
        )
    })
}

fn parse_error(record: &str, reason: &str) -> MathError {
    MathError::Parse {
        fragment: record.to_string(),
        reason: reason.to_string(),
    }
}
