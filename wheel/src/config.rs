//! Spin and render tunables.
//!
//! Defaults come from [`crate::consts`]. Hosts may override them with a JSON
//! blob (camelCase keys, every key optional) which is validated before use.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    AUTO_REMOVE_DELAY_MS, EASE_EXPONENT, FRAME_INTERVAL_MS, LABEL_MAX_CHARS, MAX_TURNS, MIN_TURNS, SPIN_DURATION_MS,
};

/// Error returned by [`SpinConfig::from_json`] and [`SpinConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse wheel config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("durationMs must be positive, got {0}")]
    Duration(f64),
    #[error("turn range must satisfy 0 < minTurns < maxTurns, got [{min}, {max})")]
    Turns { min: f64, max: f64 },
    #[error("frameIntervalMs must be non-negative, got {0}")]
    FrameInterval(f64),
    #[error("easeExponent must be at least 1, got {0}")]
    EaseExponent(f64),
    #[error("labelMaxChars must be at least 1")]
    LabelBudget,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpinConfig {
    pub duration_ms: f64,
    pub min_turns: f64,
    pub max_turns: f64,
    pub frame_interval_ms: f64,
    pub ease_exponent: f64,
    pub auto_remove_delay_ms: u32,
    pub label_max_chars: usize,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            duration_ms: SPIN_DURATION_MS,
            min_turns: MIN_TURNS,
            max_turns: MAX_TURNS,
            frame_interval_ms: FRAME_INTERVAL_MS,
            ease_exponent: EASE_EXPONENT,
            auto_remove_delay_ms: AUTO_REMOVE_DELAY_MS,
            label_max_chars: LABEL_MAX_CHARS,
        }
    }
}

impl SpinConfig {
    /// Parse and validate a JSON override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the matching
    /// variant for any value that fails [`SpinConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the tunables describe a spin that terminates.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.duration_ms.is_finite() && self.duration_ms > 0.0) {
            return Err(ConfigError::Duration(self.duration_ms));
        }
        if !(self.min_turns > 0.0 && self.min_turns < self.max_turns && self.max_turns.is_finite()) {
            return Err(ConfigError::Turns { min: self.min_turns, max: self.max_turns });
        }
        if !(self.frame_interval_ms.is_finite() && self.frame_interval_ms >= 0.0) {
            return Err(ConfigError::FrameInterval(self.frame_interval_ms));
        }
        if !(self.ease_exponent.is_finite() && self.ease_exponent >= 1.0) {
            return Err(ConfigError::EaseExponent(self.ease_exponent));
        }
        if self.label_max_chars == 0 {
            return Err(ConfigError::LabelBudget);
        }
        Ok(())
    }
}
