//! Tracker configuration.
//!
//! Use the builder methods to customise a config, or load one from JSON.
//!
//! # Example
//!
//! ```ignore
//! use popguard::config::TrackerConfig;
//!
//! let config = TrackerConfig::default()
//!     .with_threshold(50.0)
//!     .with_env_overrides();
//! config.validate()?;
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// Default distance (pixels) the pointer may stray from a hovered box.
pub const DEFAULT_THRESHOLD: f64 = 100.0;

/// Default radius around the start point that always counts as safe.
pub const DEFAULT_START_TOLERANCE: f64 = 5.0;

/// Environment variable overriding [`TrackerConfig::threshold`].
pub const THRESHOLD_ENV: &str = "POPGUARD_THRESHOLD";

/// Environment variable overriding [`TrackerConfig::start_tolerance`].
pub const START_TOLERANCE_ENV: &str = "POPGUARD_START_TOLERANCE";

/// Configuration for a [`ProximityTracker`](crate::tracker::ProximityTracker).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// How far outside the box the pointer may go once it has hovered (default: 100)
    pub threshold: f64,
    /// Pointer travel from the start point below which no close is evaluated (default: 5)
    pub start_tolerance: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            start_tolerance: DEFAULT_START_TOLERANCE,
        }
    }
}

impl TrackerConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hovered-state close threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the start-point tolerance radius.
    pub fn with_start_tolerance(mut self, tolerance: f64) -> Self {
        self.start_tolerance = tolerance;
        self
    }

    /// Parse a config from a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> TrackerResult<Self> {
        let config: TrackerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `POPGUARD_THRESHOLD` / `POPGUARD_START_TOLERANCE` if set.
    ///
    /// Values that do not parse as numbers are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(threshold) = read_env_f64(THRESHOLD_ENV) {
            self.threshold = threshold;
        }
        if let Some(tolerance) = read_env_f64(START_TOLERANCE_ENV) {
            self.start_tolerance = tolerance;
        }
        self
    }

    /// Check that every value is finite and non-negative.
    pub fn validate(&self) -> TrackerResult<()> {
        check_non_negative("threshold", self.threshold)?;
        check_non_negative("start_tolerance", self.start_tolerance)?;
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f64) -> TrackerResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TrackerError::InvalidConfig { field, value })
    }
}

fn read_env_f64(name: &str) -> Option<f64> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<f64>() {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!("Ignoring {}={:?}: {}", name, raw, err);
            None
        }
    }
}
