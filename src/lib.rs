//! Prompt fusion: a small blending language for text-conditioned diffusion prompts.
//!
//! A prompt such as `a [cat:dog:0.5] in {the rain:2|the snow}` describes conditioning
//! that changes over the sampling steps. This crate turns such prompts into compressed
//! per-step schedules of conditioning vectors, delegating the text encoding itself to a
//! caller-supplied [`PromptEncoder`].
//!
//! # Pipeline overview
//!
//! 1. **Parse**: `&str -> Expression` (prompt editing, weighted fuses, eased curves)
//! 2. **Extend**: `Expression -> TensorBuilder` (step ranges resolved, leaf texts deduplicated)
//! 3. **Encode**: the encoder maps every distinct leaf text to a [`Schedule`], once per batch
//! 4. **Build**: `TensorBuilder + schedules -> InterpolationTensor` (lengths reconciled)
//! 5. **Sample**: `InterpolationTensor -> Schedule` (one query per step, run-length compressed)
//!
//! [`learned_conditioning`] runs all five steps for a batch of prompts.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same prompts and vectors always yield bit-identical schedules.
//! - **No global state**: the negative-prompt anchor travels in an explicit [`FusionContext`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod fusion;
mod geometry;
mod parse;
mod schedule;
mod tensor;

pub use foundation::core::{CondVector, StepRange};
pub use foundation::error::{FusionError, FusionResult};
pub use fusion::context::FusionContext;
pub use fusion::encoder::{PromptEncoder, StaticEncoder};
pub use fusion::pipeline::learned_conditioning;
pub use fusion::settings::FusionSettings;
pub use geometry::Geometry;
pub use geometry::bezier::bezier;
pub use geometry::ease::Easing;
pub use geometry::linear::{Lerp, linear};
pub use geometry::spherical::{NEAR_ZERO_ANGLE, NORM_EPSILON, spherical};
pub use parse::ast::{CurveGeometry, Expression, StepLiteral};
pub use parse::error::SyntaxError;
pub use parse::parser::parse;
pub use schedule::model::{Schedule, ScheduledCond};
pub use schedule::sampler::sample;
pub use tensor::bound::InterpolationTensor;
pub use tensor::builder::{TensorBuilder, extend};
pub use tensor::database::PromptDatabase;
pub use tensor::node::TensorNode;
pub use tensor::padding::{Padding, reconcile};
