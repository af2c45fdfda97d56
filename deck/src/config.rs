//! Tunable navigation constants.
//!
//! DESIGN
//! ======
//! The gesture thresholds were tuned by feel, so they are carried as data
//! rather than hard-coded. Only their relative ordering is a contract: the
//! wheel burst-reset window must be shorter than the wheel cool-down.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    HEADER_HIDE_DELAY_MS, HEADER_POINTER_ZONE_PX, HEADER_TOP_OFFSET_PX, SLIDE_EDGE_TOLERANCE_PX, SWIPE_DEBOUNCE_MS,
    SWIPE_THRESHOLD_PX, WHEEL_BURST_RESET_MS, WHEEL_DEBOUNCE_MS, WHEEL_THRESHOLD_PX,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid deck config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be a positive finite number (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("wheel_burst_reset_ms ({burst_reset}) must be shorter than wheel_debounce_ms ({debounce})")]
    WheelWindows { burst_reset: f64, debounce: f64 },
}

/// Navigation thresholds and timing windows.
///
/// Distances are CSS pixels, durations are milliseconds. Every field falls
/// back to its default when absent from a JSON override.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub edge_tolerance: f64,
    pub wheel_burst_reset_ms: f64,
    pub wheel_threshold: f64,
    pub wheel_debounce_ms: f64,
    pub swipe_threshold: f64,
    pub swipe_debounce_ms: f64,
    pub header_hide_delay_ms: f64,
    pub header_pointer_zone: f64,
    pub header_top_offset: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            edge_tolerance: SLIDE_EDGE_TOLERANCE_PX,
            wheel_burst_reset_ms: WHEEL_BURST_RESET_MS,
            wheel_threshold: WHEEL_THRESHOLD_PX,
            wheel_debounce_ms: WHEEL_DEBOUNCE_MS,
            swipe_threshold: SWIPE_THRESHOLD_PX,
            swipe_debounce_ms: SWIPE_DEBOUNCE_MS,
            header_hide_delay_ms: HEADER_HIDE_DELAY_MS,
            header_pointer_zone: HEADER_POINTER_ZONE_PX,
            header_top_offset: HEADER_TOP_OFFSET_PX,
        }
    }
}

impl NavConfig {
    /// Parse a (possibly partial) JSON override and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the validation
    /// errors of [`NavConfig::validate`] otherwise.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check magnitudes and the wheel window ordering.
    ///
    /// `header_top_offset` may be zero; everything else must be positive.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("edge_tolerance", self.edge_tolerance),
            ("wheel_burst_reset_ms", self.wheel_burst_reset_ms),
            ("wheel_threshold", self.wheel_threshold),
            ("wheel_debounce_ms", self.wheel_debounce_ms),
            ("swipe_threshold", self.swipe_threshold),
            ("swipe_debounce_ms", self.swipe_debounce_ms),
            ("header_hide_delay_ms", self.header_hide_delay_ms),
            ("header_pointer_zone", self.header_pointer_zone),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if !self.header_top_offset.is_finite() || self.header_top_offset < 0.0 {
            return Err(ConfigError::NotPositive { field: "header_top_offset", value: self.header_top_offset });
        }
        if self.wheel_burst_reset_ms >= self.wheel_debounce_ms {
            return Err(ConfigError::WheelWindows {
                burst_reset: self.wheel_burst_reset_ms,
                debounce: self.wheel_debounce_ms,
            });
        }
        Ok(())
    }
}
