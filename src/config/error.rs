//! Configuration Error Types
//!
//! Errors raised while building layered property sources and binding typed
//! settings such as the health timeout. Resolving properties never fails;
//! only the loader and duration parsing produce these.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors with detailed context
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Configuration file not found at expected locations
    #[error("Configuration file not found. Searched paths: {searched_paths:?}")]
    ConfigFileNotFound { searched_paths: Vec<PathBuf> },

    /// The layered source (files + environment) could not be built
    #[error("Failed to build configuration source: {error}")]
    ConfigSourceError { error: String },

    /// Invalid configuration value
    #[error("Invalid value '{value}' for field '{field}': {context}")]
    InvalidValue {
        field: String,
        value: String,
        context: String,
    },

    /// Configuration validation errors
    #[error("Configuration validation failed: {error}")]
    ValidationError { error: String },
}

impl ConfigurationError {
    /// Create a configuration file not found error
    pub fn config_file_not_found(searched_paths: Vec<PathBuf>) -> Self {
        Self::ConfigFileNotFound { searched_paths }
    }

    /// Create a source build error
    pub fn config_source_error<E: std::fmt::Display>(error: E) -> Self {
        Self::ConfigSourceError {
            error: error.to_string(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value<F: Into<String>, V: Into<String>, C: Into<String>>(
        field: F,
        value: V,
        context: C,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            context: context.into(),
        }
    }

    /// Create a validation error
    pub fn validation_error<E: std::fmt::Display>(error: E) -> Self {
        Self::ValidationError {
            error: error.to_string(),
        }
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigurationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_not_found_error() {
        let paths = vec![PathBuf::from("/etc/kafka/application.yaml")];
        let error = ConfigurationError::config_file_not_found(paths);

        let error_string = error.to_string();
        assert!(error_string.contains("Configuration file not found"));
        assert!(error_string.contains("/etc/kafka/application.yaml"));
    }

    #[test]
    fn test_invalid_value_error() {
        let error = ConfigurationError::invalid_value(
            "kafka.health-timeout",
            "soon",
            "expected a duration such as 10s or PT10S",
        );

        let error_string = error.to_string();
        assert!(error_string.contains("Invalid value 'soon' for field 'kafka.health-timeout'"));
        assert!(error_string.contains("expected a duration"));
    }

    #[test]
    fn test_source_error_wraps_display() {
        let error = ConfigurationError::config_source_error("unexpected end of YAML");
        assert_eq!(
            error.to_string(),
            "Failed to build configuration source: unexpected end of YAML"
        );
    }
}
