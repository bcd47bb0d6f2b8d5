use crate::foundation::core::StepRange;
use crate::foundation::error::{FusionError, FusionResult};
use crate::geometry::Geometry;
use crate::geometry::ease::Easing;
use crate::parse::ast::{Expression, StepLiteral};
use crate::schedule::model::Schedule;
use crate::tensor::bound::{Binding, InterpolationTensor};
use crate::tensor::database::PromptDatabase;
use crate::tensor::node::TensorNode;
use crate::tensor::padding::{Padding, reconcile};

/// Unbound interpolation tensor for one prompt, plus the leaf texts it needs encoded.
#[derive(Clone, Debug)]
pub struct TensorBuilder {
    root: TensorNode,
    database: PromptDatabase,
}

impl TensorBuilder {
    /// Resolve `expr` over `[0, total_steps)`.
    pub fn new(expr: &Expression, total_steps: usize) -> FusionResult<Self> {
        if total_steps == 0 {
            return Err(FusionError::validation("total_steps must be > 0"));
        }
        let range = StepRange::new(0, total_steps)?;
        let mut database = PromptDatabase::new();
        let root = extend(expr, range, total_steps, &mut database);
        Ok(Self { root, database })
    }

    /// Texts the encoder must supply schedules for, by index.
    pub fn database(&self) -> &PromptDatabase {
        &self.database
    }

    /// Root of the unbound tree.
    pub fn root(&self) -> &TensorNode {
        &self.root
    }

    /// Bind one encoded schedule per database index.
    ///
    /// All vectors, the anchor's included, are padded to the longest one first.
    #[tracing::instrument(skip_all, fields(prompts = self.database.len()))]
    pub fn build(
        self,
        bindings: Vec<Schedule>,
        padding: &Padding,
        anchor: Option<&Schedule>,
        geometry: Geometry,
    ) -> FusionResult<InterpolationTensor> {
        let count = self.database.len();
        if bindings.len() > count {
            return Err(FusionError::validation(format!(
                "{} bindings supplied for {count} prompts",
                bindings.len()
            )));
        }
        for index in 0..count {
            if bindings.get(index).is_none_or(Schedule::is_empty) {
                return Err(FusionError::MissingBinding {
                    index,
                    text: self.database.get(index).unwrap_or_default().to_owned(),
                });
            }
        }
        if anchor.is_some_and(Schedule::is_empty) {
            return Err(FusionError::validation("anchor schedule is empty"));
        }

        let mut schedules = bindings;
        schedules.extend(anchor.cloned());
        reconcile(&mut schedules, padding)?;
        let anchor = if anchor.is_some() {
            schedules.pop().and_then(Binding::new)
        } else {
            None
        };

        let bindings = schedules
            .into_iter()
            .filter_map(Binding::new)
            .collect::<Vec<_>>();
        Ok(InterpolationTensor::new(
            self.root,
            self.database,
            bindings,
            anchor,
            geometry,
        ))
    }
}

/// Resolve `expr` over `range`, registering its leaves in `database`.
pub fn extend(
    expr: &Expression,
    range: StepRange,
    total_steps: usize,
    database: &mut PromptDatabase,
) -> TensorNode {
    match expr {
        Expression::Leaf(text) => TensorNode::Leaf {
            index: database.register(text),
        },
        Expression::Sequence {
            children,
            boundaries,
        } => {
            let mut starts = Vec::with_capacity(children.len());
            starts.push(range.start);
            let mut floor = range.start;
            for literal in boundaries {
                let step = resolve_step(*literal, total_steps).unwrap_or(floor);
                floor = range.clamp_boundary(step).max(floor);
                starts.push(floor);
            }

            let nodes = children
                .iter()
                .enumerate()
                .map(|(i, child)| {
                    let start = starts.get(i).copied().unwrap_or(range.end);
                    let end = starts.get(i + 1).copied().unwrap_or(range.end);
                    let sub = StepRange {
                        start,
                        end: end.max(start),
                    };
                    extend(child, sub, total_steps, database)
                })
                .collect();
            starts.truncate(children.len());
            TensorNode::Sequence {
                children: nodes,
                starts,
            }
        }
        Expression::Fuse { children, weights } => TensorNode::Fuse {
            children: children
                .iter()
                .map(|child| extend(child, range, total_steps, database))
                .collect(),
            weights: weights.clone(),
        },
        Expression::Curve {
            children,
            geometry,
            stops,
        } => TensorNode::Curve {
            children: children
                .iter()
                .map(|child| extend(child, range, total_steps, database))
                .collect(),
            stops: resolve_stops(stops, range, total_steps),
            easing: Easing::from_geometry(geometry),
        },
    }
}

/// Absolute step for a literal; fractions of the total are floored.
fn resolve_step(literal: StepLiteral, total_steps: usize) -> Option<usize> {
    match literal {
        StepLiteral::Absolute(step) => Some(step),
        StepLiteral::Fraction(f) => Some((f * total_steps as f64).floor() as usize),
        StepLiteral::Auto => None,
    }
}

/// Curve stops as non-decreasing fractions of `total_steps`.
fn resolve_stops(stops: &[StepLiteral], range: StepRange, total_steps: usize) -> Vec<f64> {
    let mut known: Vec<Option<f64>> = stops
        .iter()
        .map(|s| resolve_step(*s, total_steps).map(|step| step as f64))
        .collect();
    if let Some(first) = known.first_mut() {
        first.get_or_insert(range.start as f64);
    }
    if let Some(last) = known.last_mut() {
        last.get_or_insert(range.last() as f64);
    }

    let explicit: Vec<usize> = (0..known.len()).filter(|&i| known[i].is_some()).collect();
    let mut out: Vec<f64> = known.iter().map(|k| k.unwrap_or(0.0)).collect();
    for pair in explicit.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        let (a, b) = (out[lo], out[hi]);
        for j in lo + 1..hi {
            out[j] = a + (b - a) * (j - lo) as f64 / (hi - lo) as f64;
        }
    }

    let mut floor = f64::NEG_INFINITY;
    for stop in &mut out {
        floor = stop.max(floor);
        *stop = floor / total_steps as f64;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/tensor/builder.rs"]
mod tests;
