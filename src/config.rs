//! Declarative slider configuration loaded from TOML.
//!
//! ```toml
//! [range]
//! min = 0.0
//! max = 100.0
//! value = 40.0
//!
//! [track]
//! marks = [30.0, 50.0, 80.0]
//! mark_color = "FF0000"
//! line_cap = "square"
//! height = 8.0
//!
//! [tooltip]
//! fill_color = "000000CC"
//! ```
//!
//! Every section and field is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::control::MarkSliderCore;
use crate::error::ConfigError;
use crate::style::TrackStyle;
use crate::tooltip::TooltipStyle;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    pub min: f64,
    pub max: f64,
    pub value: f64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            value: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub range: RangeConfig,
    pub track: TrackStyle,
    pub tooltip: TooltipStyle,
}

impl SliderConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loading slider config from {}", path.as_ref().display());
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let RangeConfig { min, max, .. } = self.range;
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ConfigError::InvalidRange { min, max });
        }
        Ok(())
    }

    /// Build a slider model from this configuration.
    pub fn to_core(&self) -> Result<MarkSliderCore, ConfigError> {
        self.validate()?;
        let mut core = MarkSliderCore::new(self.track.clone());
        core.set_range(self.range.min, self.range.max);
        core.set_value(self.range.value);
        if core.value() != self.range.value {
            log::warn!(
                "slider value {} is outside {}..{}, using {}",
                self.range.value,
                self.range.min,
                self.range.max,
                core.value()
            );
        }
        core.set_tooltip_style(self.tooltip.clone());
        Ok(core)
    }
}
