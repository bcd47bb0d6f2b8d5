use crate::geometry::bezier::bezier;
use crate::parse::ast::CurveGeometry;

/// Easing used to map a curve's local progress.
#[derive(Clone, Debug, PartialEq)]
pub enum Easing {
    /// Progress is used as-is.
    Linear,
    /// Bezier over the full control polygon, pinned to `0` and `1` at its ends.
    Bezier(Vec<f64>),
}

impl Easing {
    /// Easing for a parsed curve geometry; interior control points get the `0`/`1` ends.
    pub fn from_geometry(geometry: &CurveGeometry) -> Self {
        match geometry {
            CurveGeometry::Linear => Self::Linear,
            CurveGeometry::Bezier { control_points } => {
                let mut points = Vec::with_capacity(control_points.len() + 2);
                points.push(0.0);
                points.extend_from_slice(control_points);
                points.push(1.0);
                Self::Bezier(points)
            }
        }
    }

    /// Apply this easing to normalized progress `t` in `[0, 1]`.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Bezier(points) => bezier(t, points).unwrap_or(t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/ease.rs"]
mod tests;
