//! Error types for the nutrition targets engine

use thiserror::Error;

/// Engine error types
///
/// Missing fields are defaulted and reference-table gaps surface as absent
/// values, so malformed input is the only way a calculation can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Invalid input for {field}: {message}")]
    InvalidInput { field: String, message: String },
}

impl CalculatorError {
    /// Build an `InvalidInput` error for the given field
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        CalculatorError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending input field
    pub fn field(&self) -> &str {
        match self {
            CalculatorError::InvalidInput { field, .. } => field,
        }
    }
}

/// Result type alias for engine operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_names_field() {
        let error = CalculatorError::invalid_input("weight", "Weight must be a number");
        assert_eq!(error.field(), "weight");
        assert_eq!(
            error.to_string(),
            "Invalid input for weight: Weight must be a number"
        );
    }
}
