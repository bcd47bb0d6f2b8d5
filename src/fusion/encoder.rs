use std::collections::BTreeMap;

use anyhow::bail;
use serde::{Deserialize, Serialize};

use crate::foundation::core::CondVector;
use crate::schedule::model::Schedule;
use crate::tensor::padding::Padding;

/// Text-to-vector collaborator that fusion delegates encoding to.
pub trait PromptEncoder {
    /// One schedule per entry of `prompts`, in the same order.
    fn encode(&mut self, prompts: &[String], total_steps: usize) -> anyhow::Result<Vec<Schedule>>;

    /// Filler used to equalize vector lengths before blending.
    fn padding(&self) -> &Padding;
}

/// Lookup-table encoder with one fixed vector per known prompt.
///
/// ```json
/// { "filler": [0.0, 0.0], "prompts": { "a cat": [0.1, 0.9] } }
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StaticEncoder {
    #[serde(rename = "filler", default)]
    padding: Padding,
    prompts: BTreeMap<String, CondVector>,
    #[serde(skip)]
    requests: Vec<Vec<String>>,
}

impl StaticEncoder {
    /// Encoder padding with `filler` and knowing no prompts yet.
    pub fn new(filler: CondVector) -> Self {
        Self {
            padding: Padding::new(filler),
            ..Self::default()
        }
    }

    /// Register the vector returned for `text`.
    pub fn with_prompt(mut self, text: impl Into<String>, cond: impl Into<CondVector>) -> Self {
        self.prompts.insert(text.into(), cond.into());
        self
    }

    /// Prompt lists received by [`PromptEncoder::encode`], one per call.
    pub fn requests(&self) -> &[Vec<String>] {
        &self.requests
    }
}

impl PromptEncoder for StaticEncoder {
    fn encode(&mut self, prompts: &[String], total_steps: usize) -> anyhow::Result<Vec<Schedule>> {
        self.requests.push(prompts.to_vec());
        prompts
            .iter()
            .map(|text| match self.prompts.get(text) {
                Some(cond) => Ok(Schedule::constant(cond.clone(), total_steps)),
                None => bail!("no vector for prompt {text:?}"),
            })
            .collect()
    }

    fn padding(&self) -> &Padding {
        &self.padding
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fusion/encoder.rs"]
mod tests;
