// ─────────────────────────────────────────────────────────────────────
// Bella Kernel — Geometric Output Records
// ─────────────────────────────────────────────────────────────────────
//! Flat records emitted by the projective samplers. `colour` is the
//! leading letter of the word that produced the record; it is a
//! categorical tag for plotting, not a group element.

use serde::{Deserialize, Serialize};

/// A sampled point `x + iy` on (an approximation of) the limit set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimitPoint {
    pub x: f64,
    pub y: f64,
    pub colour: usize,
}

impl LimitPoint {
    pub fn new(x: f64, y: f64, colour: usize) -> Self {
        Self { x, y, colour }
    }

    /// Euclidean distance to another sampled point.
    pub fn distance(&self, other: &LimitPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Isometric circle of a group element, centred at `x + iy`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsometricCircle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub colour: usize,
}

impl IsometricCircle {
    pub fn new(x: f64, y: f64, radius: f64, colour: usize) -> Self {
        Self { x, y, radius, colour }
    }

    /// True if the point `(px, py)` lies strictly inside the circle.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        (px - self.x).hypot(py - self.y) < self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_point_distance() {
        let a = LimitPoint::new(0.0, 0.0, 0);
        let b = LimitPoint::new(3.0, 4.0, 1);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_circle_contains() {
        let c = IsometricCircle::new(1.0, 0.0, 0.5, 2);
        assert!(c.contains(1.2, 0.1));
        assert!(!c.contains(0.0, 0.0));
    }

    #[test]
    fn test_records_serialise_flat() {
        let c = IsometricCircle::new(1.0, -2.0, 0.5, 3);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":-2.0,"radius":0.5,"colour":3}"#);
    }
}
