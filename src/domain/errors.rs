//! Domain error types
//!
//! This module defines the error hierarchy for the greetings service.
//! Errors are domain-specific and don't expose third-party types.

use super::greeting::FieldError;
use super::ids::GreetingId;
use thiserror::Error;

/// Main error type
///
/// This is the primary error type used throughout the application. The
/// request layer maps each variant onto an HTTP status code.
#[derive(Debug, Error)]
pub enum GreetingsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Client input failed field validation
    #[error("Validation failed: {}", format_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// Requested greeting does not exist
    #[error("Greeting not found with id: {0}")]
    NotFound(GreetingId),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl GreetingsError {
    /// Returns true when the error describes a client mistake rather than a
    /// server-side failure
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NotFound(_))
    }
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

// Conversion from std::io::Error
impl From<std::io::Error> for GreetingsError {
    fn from(err: std::io::Error) -> Self {
        GreetingsError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for GreetingsError {
    fn from(err: serde_json::Error) -> Self {
        GreetingsError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for GreetingsError {
    fn from(err: toml::de::Error) -> Self {
        GreetingsError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from PostgreSQL driver errors
impl From<tokio_postgres::Error> for GreetingsError {
    fn from(err: tokio_postgres::Error) -> Self {
        GreetingsError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = GreetingsError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_not_found_display() {
        let err = GreetingsError::NotFound(GreetingId::new(42));
        assert_eq!(err.to_string(), "Greeting not found with id: 42");
    }

    #[test]
    fn test_validation_display_lists_fields() {
        let err = GreetingsError::Validation(vec![FieldError::new(
            "message",
            "Message cannot be blank",
        )]);
        assert_eq!(
            err.to_string(),
            "Validation failed: message: Message cannot be blank"
        );
    }

    #[test]
    fn test_client_error_classification() {
        assert!(GreetingsError::NotFound(GreetingId::new(1)).is_client_error());
        assert!(GreetingsError::Validation(Vec::new()).is_client_error());
        assert!(!GreetingsError::Database("down".to_string()).is_client_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: GreetingsError = io_err.into();
        assert!(matches!(err, GreetingsError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: GreetingsError = json_err.into();
        assert!(matches!(err, GreetingsError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: GreetingsError = toml_err.into();
        assert!(matches!(err, GreetingsError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_implements_std_error() {
        let err = GreetingsError::Other("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
