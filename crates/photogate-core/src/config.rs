use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BLUR_THRESHOLD, DEFAULT_DARKNESS_THRESHOLD, DEFAULT_FOCUS_THRESHOLD};
use crate::error::{GateError, Result};

/// Pass/fail thresholds. A score strictly below its threshold fails.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Minimum Laplacian variance.
    pub blur_threshold: f64,
    /// Minimum mean intensity (0-255).
    pub darkness_threshold: f64,
    /// Minimum strong-edge fraction (0.0..1.0).
    pub focus_threshold: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            blur_threshold: DEFAULT_BLUR_THRESHOLD,
            darkness_threshold: DEFAULT_DARKNESS_THRESHOLD,
            focus_threshold: DEFAULT_FOCUS_THRESHOLD,
        }
    }
}

impl QualityConfig {
    /// Reject thresholds that cannot be compared meaningfully.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("blur_threshold", self.blur_threshold),
            ("darkness_threshold", self.darkness_threshold),
            ("focus_threshold", self.focus_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GateError::InvalidConfig(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        if self.focus_threshold > 1.0 {
            return Err(GateError::InvalidConfig(format!(
                "focus_threshold is a proportion and must be at most 1.0, got {}",
                self.focus_threshold
            )));
        }
        Ok(())
    }

    /// Parse a (possibly partial) TOML document; missing keys keep defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
