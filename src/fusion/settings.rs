use serde::{Deserialize, Serialize};

use crate::foundation::error::{FusionError, FusionResult};
use crate::geometry::Geometry;

/// User-facing switches for prompt fusion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionSettings {
    /// When `false` prompts go to the encoder verbatim.
    pub enabled: bool,
    /// Rotate spherical blends around the negative prompt's vector.
    pub rotate_around_negative: bool,
    /// Spherical rotation strength in `[0, 1]`; `0` keeps blends linear.
    pub curve_scale: f64,
}

impl Default for FusionSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            rotate_around_negative: true,
            curve_scale: 0.0,
        }
    }
}

impl FusionSettings {
    /// Parse settings from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> FusionResult<Self> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| FusionError::serde(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check value ranges.
    pub fn validate(&self) -> FusionResult<()> {
        if !self.curve_scale.is_finite() || !(0.0..=1.0).contains(&self.curve_scale) {
            return Err(FusionError::validation(format!(
                "curve_scale must be within [0, 1], got {}",
                self.curve_scale
            )));
        }
        Ok(())
    }

    /// Blend geometry selected by `curve_scale`.
    pub fn geometry(&self) -> Geometry {
        Geometry::from_scale(self.curve_scale)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fusion/settings.rs"]
mod tests;
