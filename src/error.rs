//! Error types for tracker construction and configuration.
//!
//! The tracker performs no I/O, so nothing here is retryable: every variant
//! describes a caller mistake that has to be fixed at the call site.

use thiserror::Error;

/// Errors surfaced while building a [`ProximityTracker`](crate::tracker::ProximityTracker)
/// or loading a [`TrackerConfig`](crate::config::TrackerConfig).
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The target could not be resolved to a concrete layout node.
    #[error("invalid target element: {reason}")]
    InvalidTarget { reason: String },

    /// A configuration value is out of range.
    #[error("invalid config value for {field}: {value} (must be finite and >= 0)")]
    InvalidConfig { field: &'static str, value: f64 },

    /// A JSON configuration document could not be parsed.
    #[error("failed to parse tracker config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl TrackerError {
    pub(crate) fn unresolved_target() -> Self {
        TrackerError::InvalidTarget {
            reason: "target did not resolve to a node".to_string(),
        }
    }

    pub(crate) fn detached_target() -> Self {
        TrackerError::InvalidTarget {
            reason: "target node is not attached to a layout".to_string(),
        }
    }

    /// Short machine-readable code for logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            TrackerError::InvalidTarget { .. } => "POPGUARD_INVALID_TARGET",
            TrackerError::InvalidConfig { .. } => "POPGUARD_INVALID_CONFIG",
            TrackerError::ConfigParse(_) => "POPGUARD_CONFIG_PARSE",
        }
    }
}

/// Result alias used throughout the crate.
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_target_display() {
        let err = TrackerError::unresolved_target();
        assert_eq!(
            err.to_string(),
            "invalid target element: target did not resolve to a node"
        );
        assert_eq!(err.error_code(), "POPGUARD_INVALID_TARGET");

        let err = TrackerError::detached_target();
        assert!(err.to_string().contains("not attached"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = TrackerError::InvalidConfig {
            field: "threshold",
            value: -1.0,
        };
        assert!(err.to_string().contains("threshold"));
        assert!(err.to_string().contains("-1"));
        assert_eq!(err.error_code(), "POPGUARD_INVALID_CONFIG");
    }

    #[test]
    fn test_config_parse_has_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TrackerError = json_err.into();

        assert!(matches!(err, TrackerError::ConfigParse(_)));
        assert!(err.source().is_some());
        assert_eq!(err.error_code(), "POPGUARD_CONFIG_PARSE");
    }
}
