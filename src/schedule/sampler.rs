use crate::schedule::model::Schedule;
use crate::tensor::bound::InterpolationTensor;

/// Query `tensor` once per step of `[0, total_steps)` and run-length compress the result.
///
/// Adjacent steps merge only when their vectors are exactly equal.
#[tracing::instrument(skip(tensor))]
pub fn sample(tensor: &InterpolationTensor, total_steps: usize) -> Schedule {
    let mut schedule = Schedule::default();
    for step in 0..total_steps {
        let t = step as f64 / total_steps as f64;
        schedule.push_step(step, tensor.interpolate(t, step));
    }
    tracing::debug!(entries = schedule.len(), "sampled schedule");
    schedule
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/sampler.rs"]
mod tests;
