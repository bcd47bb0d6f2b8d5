use crate::foundation::core::CondVector;

/// Interpolation contract for values blended along a straight line.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (1.0 - t) * a + t * b
    }
}

impl Lerp for CondVector {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        CondVector(linear(t, a.as_slice(), b.as_slice()))
    }
}

/// Element-wise `a + (b - a)·t`.
///
/// Evaluated as `(1 - t)·a + t·b` in `f64`, so `t = 0` returns `a` and `t = 1` returns `b`
/// bit for bit. Both slices must have the same length.
pub fn linear(t: f64, a: &[f32], b: &[f32]) -> Vec<f32> {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(&x, &y)| ((1.0 - t) * f64::from(x) + t * f64::from(y)) as f32)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/linear.rs"]
mod tests;
