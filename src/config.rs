//! Widget configuration
//!
//! Loaded from YAML with kebab-case keys. Every field is optional:
//!
//! ```yaml
//! typing-feedback: 0.25     # seconds a typed letter sounds for
//! completion-margin: 0.05   # extra wait after the last note before playback ends
//! ```
//!
//! Note timing inside a sequence is fixed and cannot be configured.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::TuneError;

/// Length of the sound played when a letter is typed: an eighth note at 120 BPM.
pub const DEFAULT_TYPING_FEEDBACK: f64 = 0.25;

/// Slack added after the final gap before a session is considered complete.
pub const DEFAULT_COMPLETION_MARGIN: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct WidgetConfig {
    pub typing_feedback: f64,
    pub completion_margin: f64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        WidgetConfig {
            typing_feedback: DEFAULT_TYPING_FEEDBACK,
            completion_margin: DEFAULT_COMPLETION_MARGIN,
        }
    }
}

impl WidgetConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TuneError> {
        // An empty document means "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: WidgetConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuneError> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    fn validate(&self) -> Result<(), TuneError> {
        check_seconds("typing-feedback", self.typing_feedback)?;
        check_seconds("completion-margin", self.completion_margin)?;
        if self.typing_feedback == 0.0 {
            return Err(TuneError::Config(
                "typing-feedback must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_seconds(key: &str, value: f64) -> Result<(), TuneError> {
    if !value.is_finite() || value < 0.0 {
        return Err(TuneError::Config(format!(
            "{} must be a finite, non-negative number",
            key
        )));
    }
    Ok(())
}
