use crate::foundation::core::CondVector;
use crate::geometry::Geometry;
use crate::geometry::ease::Easing;

/// Interpolation tree mirroring a parsed expression, with leaves resolved to database
/// indices.
#[derive(Clone, Debug, PartialEq)]
pub enum TensorNode {
    /// Encoded prompt at a database index.
    Leaf {
        /// Index into the prompt database.
        index: usize,
    },
    /// Step-partitioned alternatives.
    Sequence {
        /// One subtree per partition.
        children: Vec<TensorNode>,
        /// First step owned by each child, non-decreasing; `starts[0]` is the range start.
        starts: Vec<usize>,
    },
    /// Static weighted blend.
    Fuse {
        /// Blended subtrees.
        children: Vec<TensorNode>,
        /// Non-negative weight per child.
        weights: Vec<f64>,
    },
    /// Progress-driven blend between adjacent stops.
    Curve {
        /// One subtree per stop.
        children: Vec<TensorNode>,
        /// Stop positions as fractions of the total step count, non-decreasing.
        stops: Vec<f64>,
        /// Easing applied to the local progress between two stops.
        easing: Easing,
    },
}

/// Everything a node needs at query time besides its own shape.
pub(crate) struct Query<'a, F> {
    pub(crate) leaf: F,
    pub(crate) anchor: Option<&'a CondVector>,
    pub(crate) geometry: Geometry,
}

impl<F> Query<'_, F>
where
    F: Fn(usize) -> CondVector,
{
    fn blend(&self, ratio: f64, a: &CondVector, b: &CondVector) -> CondVector {
        self.geometry.blend(ratio, a, b, self.anchor)
    }
}

impl TensorNode {
    /// Vector of this subtree at global fraction `t` and absolute `step`.
    pub(crate) fn eval<F>(&self, query: &Query<'_, F>, t: f64, step: usize) -> CondVector
    where
        F: Fn(usize) -> CondVector,
    {
        match self {
            TensorNode::Leaf { index } => (query.leaf)(*index),
            TensorNode::Sequence { children, starts } => {
                // Boundary steps belong to the later child; empty partitions are skipped.
                let owner = starts.partition_point(|&s| s <= step).saturating_sub(1);
                children
                    .get(owner)
                    .map(|child| child.eval(query, t, step))
                    .unwrap_or_default()
            }
            TensorNode::Fuse { children, weights } => {
                let mut pairs = children.iter().zip(weights.iter().copied());
                let Some((first, mut total)) = pairs.next() else {
                    return CondVector::default();
                };
                let mut acc = first.eval(query, t, step);
                for (child, weight) in pairs {
                    let sum = total + weight;
                    let ratio = if sum > 0.0 { weight / sum } else { 0.0 };
                    total = sum;
                    if ratio == 0.0 {
                        continue;
                    }
                    let next = child.eval(query, t, step);
                    acc = query.blend(ratio, &acc, &next);
                }
                acc
            }
            TensorNode::Curve {
                children,
                stops,
                easing,
            } => {
                let (Some(&first), Some(&last)) = (stops.first(), stops.last()) else {
                    return CondVector::default();
                };
                let child = |i: usize| {
                    children
                        .get(i)
                        .map(|c| c.eval(query, t, step))
                        .unwrap_or_default()
                };
                if t < first {
                    return child(0);
                }
                if t >= last {
                    return child(stops.len() - 1);
                }

                // stops[lo] <= t < stops[hi], so the span is never zero.
                let hi = stops.partition_point(|&s| s <= t);
                let lo = hi - 1;
                let local = (t - stops[lo]) / (stops[hi] - stops[lo]);
                let ratio = easing.apply(local);
                if ratio == 0.0 {
                    return child(lo);
                }
                if ratio == 1.0 {
                    return child(hi);
                }
                query.blend(ratio, &child(lo), &child(hi))
            }
        }
    }

    /// Database indices referenced by this subtree, in left-to-right order.
    pub fn indices(&self) -> Vec<usize> {
        let mut out = Vec::new();
        self.collect_indices(&mut out);
        out
    }

    fn collect_indices(&self, out: &mut Vec<usize>) {
        match self {
            TensorNode::Leaf { index } => out.push(*index),
            TensorNode::Sequence { children, .. }
            | TensorNode::Fuse { children, .. }
            | TensorNode::Curve { children, .. } => {
                for child in children {
                    child.collect_indices(out);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tensor/node.rs"]
mod tests;
