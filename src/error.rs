//! Configuration error types.
//!
//! The simulation itself never fails: out-of-range inputs are clamped. Loading
//! a [`GameConfig`](crate::GameConfig) is the one place a host can hand us
//! something unusable.

use std::fmt;

/// Error returned when a configuration cannot be used.
#[derive(Debug)]
pub enum ConfigError {
    /// The input was not valid JSON for a `GameConfig`.
    Parse(serde_json::Error),

    /// A numeric field is non-finite or outside its valid range.
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// The value that was rejected.
        value: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "failed to parse config: {}", err),
            ConfigError::Invalid { field, value } => {
                write!(f, "config field '{}' = {} must be finite and positive", field, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Convenience alias: a `Result` using `ConfigError` as the error type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Returns an error unless `value` is finite and strictly positive.
pub fn require_positive(field: &'static str, value: f32) -> ConfigResult<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::Invalid { field, value })
    }
}
