//! Custom error types for Rentboard
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Rentboard operations
#[derive(Error, Debug)]
pub enum RentboardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Dataset document could not be loaded
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl RentboardError {
    /// Create a "not found" error for units
    pub fn unit_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Unit",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for a month of a unit
    pub fn month_not_found(unit: &str, month: &str) -> Self {
        Self::NotFound {
            entity_type: "Month",
            identifier: format!("{} ({})", month, unit),
        }
    }

    /// Create a "not found" error for the dataset file
    pub fn dataset_not_found(path: &std::path::Path) -> Self {
        Self::NotFound {
            entity_type: "Dataset",
            identifier: path.display().to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for RentboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RentboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Rentboard operations
pub type RentboardResult<T> = Result<T, RentboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RentboardError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_unit_not_found_error() {
        let err = RentboardError::unit_not_found("A101");
        assert_eq!(err.to_string(), "Unit not found: A101");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_month_not_found_error() {
        let err = RentboardError::month_not_found("A101", "Mar");
        assert_eq!(err.to_string(), "Month not found: Mar (A101)");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RentboardError = io_err.into();
        assert!(matches!(err, RentboardError::Io(_)));
        assert!(!err.is_not_found());
    }
}
