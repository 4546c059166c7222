//! Error types for the MedScreen screening system
//!
//! Splits errors into the two classes the system cares about: fatal startup
//! failures (a model that cannot be loaded) and recoverable per-submission
//! failures (bad user input, wrong feature count).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the screening system
#[derive(Error, Debug)]
pub enum ScreenError {
    /// A model artifact is missing, unreadable, or malformed. Fatal: the
    /// process cannot serve a domain without its predictor.
    #[error("Failed to load {domain} model from {path}: {reason}")]
    ModelLoad {
        domain: String,
        path: PathBuf,
        reason: String,
    },

    /// A required input field was left blank
    #[error("Field '{field}' is empty")]
    EmptyField { field: String },

    /// A field value could not be parsed as a number
    #[error("Invalid value for '{field}': '{value}' is not a number")]
    FieldParse { field: String, value: String },

    /// The assembled feature vector does not match the model's expected arity
    #[error("{domain} expects {expected} feature values, got {actual}")]
    FeatureArity {
        domain: String,
        expected: usize,
        actual: usize,
    },
}

/// Result type alias for screening operations
pub type Result<T> = std::result::Result<T, ScreenError>;

impl ScreenError {
    /// Whether the error is a per-submission failure the user can retry.
    ///
    /// Recoverable errors are rendered inline and never crash the process;
    /// everything else aborts startup.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ScreenError::EmptyField { .. }
                | ScreenError::FieldParse { .. }
                | ScreenError::FeatureArity { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parse_display() {
        let err = ScreenError::FieldParse {
            field: "Glucose Level".to_string(),
            value: "abc".to_string(),
        };
        assert!(err.to_string().contains("Glucose Level"));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_arity_display() {
        let err = ScreenError::FeatureArity {
            domain: "Heart Disease".to_string(),
            expected: 13,
            actual: 12,
        };
        assert!(err.to_string().contains("13"));
        assert!(err.to_string().contains("12"));
    }

    #[test]
    fn test_recoverable_classification() {
        let parse = ScreenError::FieldParse {
            field: "Age".to_string(),
            value: "x".to_string(),
        };
        let empty = ScreenError::EmptyField {
            field: "MDVP:Fo(Hz)".to_string(),
        };
        let arity = ScreenError::FeatureArity {
            domain: "Diabetes".to_string(),
            expected: 8,
            actual: 9,
        };
        let load = ScreenError::ModelLoad {
            domain: "Diabetes".to_string(),
            path: PathBuf::from("models/diabetes.json"),
            reason: "missing".to_string(),
        };

        assert!(parse.is_recoverable());
        assert!(empty.is_recoverable());
        assert!(arity.is_recoverable());
        assert!(!load.is_recoverable());
    }
}
