// src/math/geometry/config.rs
use crate::math::error::{MathError, MathResult};
use serde::{Deserialize, Serialize};

/// Auflösung der Polygon-Approximation gekrümmter Formen.
///
/// Reguläre Polygone verwenden immer genau ihre Seitenanzahl; Kreise werden
/// feiner unterteilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApproximationConfig {
    /// Anzahl der Eckpunkte für `Shape::vertices` eines Kreises.
    pub circle_vertices: usize,
    /// Anzahl der Segmente für `Shape::outline` eines Kreises (Rendering).
    pub circle_outline_segments: usize,
}

impl ApproximationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_circle_vertices(mut self, count: usize) -> Self {
        self.circle_vertices = count;
        self
    }

    pub fn with_circle_outline_segments(mut self, count: usize) -> Self {
        self.circle_outline_segments = count;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if self.circle_vertices < 3 {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "circle_vertices must be at least 3, got {}",
                    self.circle_vertices
                ),
            });
        }

        if self.circle_outline_segments < 3 {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "circle_outline_segments must be at least 3, got {}",
                    self.circle_outline_segments
                ),
            });
        }

        Ok(())
    }
}

impl Default for ApproximationConfig {
    fn default() -> Self {
        Self {
            circle_vertices: 30,
            circle_outline_segments: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ApproximationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.circle_vertices, 30);
        assert_eq!(config.circle_outline_segments, 100);
    }

    #[test]
    fn test_validate_rejects_coarse_circles() {
        let config = ApproximationConfig::new().with_circle_vertices(2);
        assert!(matches!(
            config.validate(),
            Err(MathError::InvalidConfiguration { .. })
        ));

        let config = ApproximationConfig::new().with_circle_outline_segments(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: ApproximationConfig =
            serde_json::from_str(r#"{ "circle_vertices": 12 }"#).unwrap();
        assert_eq!(config.circle_vertices, 12);
        assert_eq!(config.circle_outline_segments, 100);
    }
}
