use crate::foundation::core::CondVector;
use crate::geometry::Geometry;
use crate::schedule::model::Schedule;
use crate::tensor::database::PromptDatabase;
use crate::tensor::node::{Query, TensorNode};

/// Non-empty, length-reconciled schedule bound to one database index.
#[derive(Clone, Debug)]
pub(crate) struct Binding {
    schedule: Schedule,
}

impl Binding {
    pub(crate) fn new(schedule: Schedule) -> Option<Self> {
        (!schedule.is_empty()).then_some(Self { schedule })
    }

    pub(crate) fn cond_at(&self, step: usize) -> &CondVector {
        let entries = self.schedule.entries();
        let idx = entries
            .partition_point(|e| e.end_at_step <= step)
            .min(entries.len() - 1);
        &entries[idx].cond
    }
}

/// Interpolation tree with every leaf bound to encoded vectors.
#[derive(Clone, Debug)]
pub struct InterpolationTensor {
    root: TensorNode,
    database: PromptDatabase,
    bindings: Vec<Binding>,
    anchor: Option<Binding>,
    geometry: Geometry,
}

impl InterpolationTensor {
    pub(crate) fn new(
        root: TensorNode,
        database: PromptDatabase,
        bindings: Vec<Binding>,
        anchor: Option<Binding>,
        geometry: Geometry,
    ) -> Self {
        Self {
            root,
            database,
            bindings,
            anchor,
            geometry,
        }
    }

    /// Prompt texts the tensor was bound with.
    pub fn database(&self) -> &PromptDatabase {
        &self.database
    }

    /// Geometry used by fuse and curve blends.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Blended vector at global fraction `t` of the schedule and absolute `step`.
    pub fn interpolate(&self, t: f64, step: usize) -> CondVector {
        let query = Query {
            leaf: |index: usize| {
                self.bindings
                    .get(index)
                    .map(|b| b.cond_at(step).clone())
                    .unwrap_or_default()
            },
            anchor: self.anchor.as_ref().map(|a| a.cond_at(step)),
            geometry: self.geometry,
        };
        self.root.eval(&query, t, step)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tensor/bound.rs"]
mod tests;
