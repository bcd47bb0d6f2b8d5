use crate::fusion::settings::FusionSettings;
use crate::schedule::model::Schedule;

/// Per-call fusion state: settings plus the optional rotation anchor.
#[derive(Clone, Debug, Default)]
pub struct FusionContext {
    settings: FusionSettings,
    anchor: Option<Schedule>,
}

impl FusionContext {
    /// Context without an anchor, as used for the negative prompt batch itself.
    pub fn new(settings: FusionSettings) -> Self {
        Self {
            settings,
            anchor: None,
        }
    }

    /// Anchor spherical blends on the first negative schedule.
    ///
    /// Has no effect unless `rotate_around_negative` is set.
    pub fn with_negative(mut self, negative: &[Schedule]) -> Self {
        self.anchor = if self.settings.rotate_around_negative {
            negative.first().cloned()
        } else {
            None
        };
        self
    }

    /// Active settings.
    pub fn settings(&self) -> &FusionSettings {
        &self.settings
    }

    /// Schedule spherical blends rotate around, if any.
    pub fn anchor(&self) -> Option<&Schedule> {
        self.anchor.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fusion/context.rs"]
mod tests;
