use serde::Serialize;

/// Parsed prompt expression.
///
/// Concatenation is distributed over groups while parsing, so every [`Expression::Leaf`]
/// holds a complete prompt string and the variant set stays closed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    /// Literal prompt text.
    Leaf(String),
    /// Prompt editing: child `i` owns the steps from `boundaries[i - 1]` up to `boundaries[i]`.
    Sequence {
        /// Alternatives in source order.
        children: Vec<Expression>,
        /// One boundary between each pair of adjacent children.
        boundaries: Vec<StepLiteral>,
    },
    /// Static weighted blend of all children.
    Fuse {
        /// Alternatives in source order.
        children: Vec<Expression>,
        /// Non-negative weight per child (default `1`).
        weights: Vec<f64>,
    },
    /// Blend that travels from child to child across the step range.
    Curve {
        /// Alternatives in source order.
        children: Vec<Expression>,
        /// Progress easing between adjacent stops.
        geometry: CurveGeometry,
        /// One stop per child.
        stops: Vec<StepLiteral>,
    },
}

/// A step bound as written in a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepLiteral {
    /// Absolute step index.
    Absolute(usize),
    /// Fraction of the total step count (a decimal literal below `1`).
    Fraction(f64),
    /// Blank stop, placed by the tensor builder.
    Auto,
}

/// Easing shape named after the stop list of a curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveGeometry {
    /// Progress is used as-is.
    Linear,
    /// Progress is reshaped by a Bezier curve over `[0, control_points.., 1]`.
    Bezier {
        /// Interior control points on the progress axis.
        control_points: Vec<f64>,
    },
}

impl CurveGeometry {
    pub(crate) const DEFAULT_BEZIER: [f64; 2] = [0.0, 1.0];
}

impl Expression {
    /// Textual concatenation, distributed over blend groups.
    ///
    /// `a + [b:c:5]` becomes `[a b : a c : 5]`; a group on the left distributes the right
    /// operand into each of its children.
    pub fn concat(self, other: Expression) -> Expression {
        match (self, other) {
            (Expression::Leaf(a), other) if a.is_empty() => other,
            (this, Expression::Leaf(b)) if b.is_empty() => this,
            (Expression::Leaf(mut a), Expression::Leaf(b)) => {
                a.push_str(&b);
                Expression::Leaf(a)
            }
            (Expression::Leaf(a), group) => {
                group.map_children(|child| Expression::Leaf(a.clone()).concat(child))
            }
            (group, right) => group.map_children(|child| child.concat(right.clone())),
        }
    }

    /// Leaf texts in left-to-right order, duplicates included.
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Expression::Leaf(text) => out.push(text),
            Expression::Sequence { children, .. }
            | Expression::Fuse { children, .. }
            | Expression::Curve { children, .. } => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    fn map_children(self, mut f: impl FnMut(Expression) -> Expression) -> Expression {
        match self {
            Expression::Leaf(text) => f(Expression::Leaf(text)),
            Expression::Sequence {
                children,
                boundaries,
            } => Expression::Sequence {
                children: children.into_iter().map(&mut f).collect(),
                boundaries,
            },
            Expression::Fuse { children, weights } => Expression::Fuse {
                children: children.into_iter().map(&mut f).collect(),
                weights,
            },
            Expression::Curve {
                children,
                geometry,
                stops,
            } => Expression::Curve {
                children: children.into_iter().map(&mut f).collect(),
                geometry,
                stops,
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parse/ast.rs"]
mod tests;
