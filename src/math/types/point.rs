// src/math/types/point.rs
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// 2D-Punkt bzw. Vektor in der Ebene.
///
/// Gleichheit (`==`) ist exakte Float-Gleichheit. Wer Toleranz braucht,
/// verwendet [`Point::approx_eq`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Skalarprodukt
    pub fn dot(&self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Kreuzprodukt (z-Komponente)
    pub fn cross(&self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn length_squared(&self) -> f64 {
        self.dot(*self)
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Einheitsvektor; der Nullvektor bleibt Nullvektor.
    pub fn normalize(&self) -> Point {
        let len = self.length();
        if len > 0.0 { *self / len } else { Point::ZERO }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (*self - other).length()
    }

    /// Gleichheit mit Toleranz (euklidischer Abstand kleiner `epsilon`).
    pub fn approx_eq(&self, other: Point, epsilon: f64) -> bool {
        self.distance_to(other) < epsilon
    }

    /// Lexikographischer Vergleich nach (x, y).
    pub fn lexicographic_cmp(&self, other: &Point) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vector_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -1.0);

        assert_eq!(a + b, Point::new(4.0, 1.0));
        assert_eq!(a - b, Point::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(b / 2.0, Point::new(1.5, -0.5));
        assert_eq!(-a, Point::new(-1.0, -2.0));
        assert_relative_eq!(a.dot(b), 1.0);
        assert_relative_eq!(a.cross(b), -7.0);
    }

    #[test]
    fn test_length_and_distance() {
        let p = Point::new(3.0, 4.0);
        assert_relative_eq!(p.length(), 5.0);
        assert_relative_eq!(p.distance_to(Point::ZERO), 5.0);

        let n = p.normalize();
        assert_relative_eq!(n.length(), 1.0);
        assert_relative_eq!(n.x, 0.6);
    }

    #[test]
    fn test_normalize_zero_vector_is_zero() {
        assert_eq!(Point::ZERO.normalize(), Point::ZERO);
    }

    #[test]
    fn test_equality_is_exact() {
        let a = Point::new(0.1 + 0.2, 0.0);
        let b = Point::new(0.3, 0.0);
        assert_ne!(a, b);
        assert!(a.approx_eq(b, 1e-9));
    }

    #[test]
    fn test_lexicographic_order() {
        let a = Point::new(0.0, 5.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(1.0, 2.0);
        assert_eq!(a.lexicographic_cmp(&b), Ordering::Less);
        assert_eq!(c.lexicographic_cmp(&b), Ordering::Greater);
        assert_eq!(c.lexicographic_cmp(&c), Ordering::Equal);
    }

    #[test]
    fn test_display_uses_two_decimals() {
        assert_eq!(Point::new(1.0, -2.5).to_string(), "(1.00, -2.50)");
    }
}
