// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    /// Gemeinsame Toleranz für Parallelität, Tangenten, Koinzidenz und Umkreistests.
    pub const EPSILON: f64 = 1e-9;
    /// Toleranz für gleiche Polarwinkel beim Sortieren im Graham-Scan.
    pub const HULL_ANGLE_TOLERANCE: f64 = 1e-10;
    /// Toleranz für "Punkt liegt auf der Strecke" (Kreuzprodukt nahe Null).
    pub const ON_SEGMENT_TOLERANCE: f64 = 1e-10;
    pub const TAU: f64 = std::f64::consts::TAU;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Prüft ob Float (nahezu) Null ist
    pub fn nearly_zero(a: f64) -> bool {
        a.abs() < EPSILON
    }

    /// Prüft ob ein Parameter im geschlossenen Einheitsintervall liegt
    pub fn in_unit_interval(t: f64) -> bool {
        (0.0..=1.0).contains(&t)
    }
}
