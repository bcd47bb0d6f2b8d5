pub(crate) mod bezier;
pub(crate) mod ease;
pub(crate) mod linear;
pub(crate) mod spherical;

use crate::foundation::core::CondVector;

/// Vector-combination strategy used by fuse and curve nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Geometry {
    /// Affine blend.
    #[default]
    Linear,
    /// Great-circle rotation mixed with the affine blend by `scale` in `(0, 1]`.
    Spherical {
        /// `0` is linear, `1` is full rotation.
        scale: f64,
    },
}

impl Geometry {
    /// Linear when `scale` is zero, spherical otherwise.
    pub fn from_scale(scale: f64) -> Self {
        if scale == 0.0 {
            Self::Linear
        } else {
            Self::Spherical { scale }
        }
    }

    /// Blend `a` toward `b` by `t`.
    ///
    /// `t == 0` and `t == 1` return the matching endpoint without touching rotation math.
    pub fn blend(
        self,
        t: f64,
        a: &CondVector,
        b: &CondVector,
        anchor: Option<&CondVector>,
    ) -> CondVector {
        if t == 0.0 {
            return a.clone();
        }
        if t == 1.0 {
            return b.clone();
        }
        match self {
            Self::Linear => CondVector(linear::linear(t, a.as_slice(), b.as_slice())),
            Self::Spherical { scale } => CondVector(spherical::spherical(
                t,
                a.as_slice(),
                b.as_slice(),
                anchor.map(CondVector::as_slice),
                scale,
            )),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/mod.rs"]
mod tests;
