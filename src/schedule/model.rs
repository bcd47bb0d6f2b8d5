use serde::{Deserialize, Serialize};

use crate::foundation::core::CondVector;

/// One schedule entry: `cond` applies to every step before `end_at_step`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduledCond {
    /// Exclusive end step.
    pub end_at_step: usize,
    /// Conditioning vector for the entry's steps.
    pub cond: CondVector,
}

/// Ordered, gap-free sequence of conditioning vectors over `[0, total_steps)`.
///
/// Produced by the sampler and by encoders alike. `end_at_step` values strictly increase;
/// the sampler additionally never emits two adjacent entries with equal vectors.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    entries: Vec<ScheduledCond>,
}

impl Schedule {
    /// Wrap entries as-is.
    pub fn new(entries: Vec<ScheduledCond>) -> Self {
        Self { entries }
    }

    /// One vector for the whole step range.
    pub fn constant(cond: CondVector, total_steps: usize) -> Self {
        Self::new(vec![ScheduledCond {
            end_at_step: total_steps,
            cond,
        }])
    }

    /// Entries in step order.
    pub fn entries(&self) -> &[ScheduledCond] {
        &self.entries
    }

    /// Mutable entries, for in-place length reconciliation.
    pub(crate) fn entries_mut(&mut self) -> &mut [ScheduledCond] {
        &mut self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exclusive end of the last entry, `0` when empty.
    pub fn end_step(&self) -> usize {
        self.entries.last().map_or(0, |e| e.end_at_step)
    }

    /// Vector in effect at `step`.
    ///
    /// Steps past the last entry resolve to the last entry; `None` only when empty.
    pub fn cond_at(&self, step: usize) -> Option<&CondVector> {
        let idx = self.entries.partition_point(|e| e.end_at_step <= step);
        self.entries
            .get(idx)
            .or_else(|| self.entries.last())
            .map(|e| &e.cond)
    }

    /// Append the vector sampled at `step`, widening the last entry when it is equal.
    pub(crate) fn push_step(&mut self, step: usize, cond: CondVector) {
        if let Some(last) = self.entries.last_mut()
            && last.cond == cond
        {
            last.end_at_step = step + 1;
            return;
        }
        self.entries.push(ScheduledCond {
            end_at_step: step + 1,
            cond,
        });
    }

    /// Unwrap into entries.
    pub fn into_entries(self) -> Vec<ScheduledCond> {
        self.entries
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/model.rs"]
mod tests;
