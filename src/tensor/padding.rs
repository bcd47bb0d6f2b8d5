use serde::{Deserialize, Serialize};

use crate::foundation::core::CondVector;
use crate::foundation::error::{FusionError, FusionResult};
use crate::schedule::model::Schedule;

/// Filler chunk used to lengthen short conditioning vectors.
///
/// Supplied by the encoder; the chunk length is the filler's own length.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Padding {
    filler: CondVector,
}

impl Padding {
    /// Padding made of whole copies of `filler`.
    pub fn new(filler: CondVector) -> Self {
        Self { filler }
    }

    /// The encoder's "empty prompt" vector.
    pub fn filler(&self) -> &CondVector {
        &self.filler
    }

    /// Number of values added per chunk.
    pub fn chunk_len(&self) -> usize {
        self.filler.len()
    }

    /// `cond` extended with whole filler chunks up to `target` values.
    pub fn pad_to(&self, cond: &CondVector, target: usize) -> FusionResult<CondVector> {
        let got = cond.len();
        if got == target {
            return Ok(cond.clone());
        }
        let chunk = self.chunk_len();
        let mismatch = FusionError::DimensionMismatch {
            expected: target,
            got,
            chunk,
        };
        let Some(missing) = target.checked_sub(got) else {
            return Err(mismatch);
        };
        if chunk == 0 || missing % chunk != 0 {
            return Err(mismatch);
        }

        let mut values = Vec::with_capacity(target);
        values.extend_from_slice(cond.as_slice());
        for _ in 0..missing / chunk {
            values.extend_from_slice(self.filler.as_slice());
        }
        Ok(CondVector(values))
    }
}

/// Pad every vector of every schedule to the longest length among them.
pub fn reconcile(schedules: &mut [Schedule], padding: &Padding) -> FusionResult<()> {
    let target = schedules
        .iter()
        .flat_map(|s| s.entries())
        .map(|e| e.cond.len())
        .max()
        .unwrap_or(0);

    for schedule in schedules.iter_mut() {
        for entry in schedule.entries_mut() {
            if entry.cond.len() != target {
                entry.cond = padding.pad_to(&entry.cond, target)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/tensor/padding.rs"]
mod tests;
