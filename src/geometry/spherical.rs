//! Great-circle blending of conditioning vectors.

use crate::geometry::linear::linear;

/// Angles (radians) below this are treated as parallel and blended linearly.
pub const NEAR_ZERO_ANGLE: f64 = 1e-4;

/// Norms and `sin(angle)` below this make the rotation undefined; blend linearly instead.
pub const NORM_EPSILON: f64 = 1e-8;

/// Spherical blend of `a` toward `b`.
///
/// Vectors are taken relative to `anchor` when one is given. Directions travel along the
/// great circle between them while the norm is interpolated linearly, then the anchor is
/// added back. `scale` mixes the linear result (`0`) with the full rotation (`1`).
///
/// Degenerate inputs (parallel, antiparallel or zero-length relative vectors) return the
/// linear blend.
pub fn spherical(t: f64, a: &[f32], b: &[f32], anchor: Option<&[f32]>, scale: f64) -> Vec<f32> {
    let lin = linear(t, a, b);
    if scale == 0.0 {
        return lin;
    }
    let Some(rotated) = great_circle(t, a, b, anchor) else {
        return lin;
    };
    if scale >= 1.0 {
        return rotated;
    }
    lin.iter()
        .zip(&rotated)
        .map(|(&l, &r)| {
            let l = f64::from(l);
            (l + (f64::from(r) - l) * scale) as f32
        })
        .collect()
}

fn great_circle(t: f64, a: &[f32], b: &[f32], anchor: Option<&[f32]>) -> Option<Vec<f32>> {
    debug_assert_eq!(a.len(), b.len());
    let origin: Vec<f64> = match anchor {
        Some(c) => {
            debug_assert_eq!(c.len(), a.len());
            c.iter().map(|&v| f64::from(v)).collect()
        }
        None => vec![0.0; a.len()],
    };
    let rel_a: Vec<f64> = a.iter().zip(&origin).map(|(&v, o)| f64::from(v) - o).collect();
    let rel_b: Vec<f64> = b.iter().zip(&origin).map(|(&v, o)| f64::from(v) - o).collect();

    let norm_a = rel_a.iter().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b = rel_b.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm_a < NORM_EPSILON || norm_b < NORM_EPSILON {
        return None;
    }

    let dot: f64 = rel_a.iter().zip(&rel_b).map(|(x, y)| x * y).sum();
    let angle = (dot / (norm_a * norm_b)).clamp(-1.0, 1.0).acos();
    let sin_angle = angle.sin();
    if angle < NEAR_ZERO_ANGLE || sin_angle < NORM_EPSILON {
        return None;
    }

    let weight_a = ((1.0 - t) * angle).sin() / sin_angle;
    let weight_b = (t * angle).sin() / sin_angle;
    let norm = (1.0 - t) * norm_a + t * norm_b;

    Some(
        rel_a
            .iter()
            .zip(&rel_b)
            .zip(&origin)
            .map(|((x, y), o)| {
                let dir = weight_a * (x / norm_a) + weight_b * (y / norm_b);
                (dir * norm + o) as f32
            })
            .collect(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/spherical.rs"]
mod tests;
