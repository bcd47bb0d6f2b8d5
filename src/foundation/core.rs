use crate::foundation::error::{FusionError, FusionResult};

/// Half-open step range `[start, end)` in sampling-step space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StepRange {
    /// Inclusive range start.
    pub start: usize,
    /// Exclusive range end.
    pub end: usize,
}

impl StepRange {
    /// Create a validated range with `start <= end`.
    pub fn new(start: usize, end: usize) -> FusionResult<Self> {
        if start > end {
            return Err(FusionError::validation("StepRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of steps contained in the range.
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Return `true` when the range has no steps.
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Return `true` when `step` is inside `[start, end)`.
    pub fn contains(self, step: usize) -> bool {
        self.start <= step && step < self.end
    }

    /// Last step inside the range. Empty ranges return `start`.
    pub fn last(self) -> usize {
        if self.is_empty() {
            return self.start;
        }
        self.end - 1
    }

    /// Clamp a partition boundary into `[start, end]`.
    ///
    /// Unlike a step, a boundary may sit on `end`: the child after it then owns no steps.
    pub fn clamp_boundary(self, step: usize) -> usize {
        step.clamp(self.start, self.end)
    }
}

/// Flat conditioning vector produced by the external encoder.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct CondVector(pub Vec<f32>);

impl CondVector {
    /// Wrap raw values.
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    /// Number of scalar values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` when the vector holds no values.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the raw values.
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

impl From<Vec<f32>> for CondVector {
    fn from(values: Vec<f32>) -> Self {
        Self(values)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
