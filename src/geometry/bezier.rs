use crate::geometry::linear::Lerp;

/// Evaluate the Bezier curve through `control_points` at `t` (clamped to `[0, 1]`).
///
/// De Casteljau: each level lerps adjacent points until one remains. Returns `None` when
/// there are no control points.
pub fn bezier<T>(t: f64, control_points: &[T]) -> Option<T>
where
    T: Lerp + Clone,
{
    let t = t.clamp(0.0, 1.0);
    match control_points {
        [] => None,
        [only] => Some(only.clone()),
        points => {
            let reduced: Vec<T> = points.windows(2).map(|w| T::lerp(&w[0], &w[1], t)).collect();
            bezier(t, &reduced)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/bezier.rs"]
mod tests;
