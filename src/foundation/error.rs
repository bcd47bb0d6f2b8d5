use crate::parse::error::SyntaxError;

/// Crate-wide result alias.
pub type FusionResult<T> = Result<T, FusionError>;

/// Every failure that can abort a prompt batch.
///
/// None of these are recovered internally: callers fail the whole request.
#[derive(thiserror::Error, Debug)]
pub enum FusionError {
    /// Grammar violation in a prompt.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// Two vectors could not be equalized by whole-chunk filler padding.
    #[error(
        "dimension mismatch: cannot pad {got} values to {expected} with filler chunks of {chunk}"
    )]
    DimensionMismatch {
        /// Length every vector is reconciled to.
        expected: usize,
        /// Length of the vector that could not be padded.
        got: usize,
        /// Filler chunk length supplied by the encoder.
        chunk: usize,
    },

    /// A database index has no encoded schedule.
    #[error("missing binding for prompt #{index} ({text:?})")]
    MissingBinding {
        /// Database index without a vector.
        index: usize,
        /// Leaf prompt text registered at that index.
        text: String,
    },

    /// Caller-supplied configuration or arguments are out of range.
    #[error("validation error: {0}")]
    Validation(String),

    /// Settings or vectors could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serde(String),

    /// The external encoder failed or returned an unusable result.
    #[error("encoder error: {0:#}")]
    Encoder(anyhow::Error),
}

impl FusionError {
    /// Build a [`FusionError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FusionError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`FusionError::Encoder`].
    pub fn encoder(err: impl Into<anyhow::Error>) -> Self {
        Self::Encoder(err.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
