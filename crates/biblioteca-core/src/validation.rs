//! Validation utilities.

use crate::BibliotecaError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `BibliotecaError` on failure.
    fn validate_request(&self) -> Result<(), BibliotecaError> {
        self.validate().map_err(validation_errors_to_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `BibliotecaError`.
#[must_use]
pub fn validation_errors_to_error(errors: ValidationErrors) -> BibliotecaError {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let detail = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string());
                format!("{}: {}", field, detail)
            })
        })
        .collect::<Vec<_>>()
        .join("; ");

    BibliotecaError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct TestRequest {
        #[validate(custom(function = not_blank, message = "must not be blank"))]
        name: String,
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_validate_request_maps_to_validation_error() {
        let request = TestRequest { name: "  ".to_string() };
        let err = request.validate_request().unwrap_err();
        match err {
            BibliotecaError::Validation(msg) => {
                assert!(msg.contains("name"));
                assert!(msg.contains("must not be blank"));
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_request_passes_valid_input() {
        let request = TestRequest { name: "Machado".to_string() };
        assert!(request.validate_request().is_ok());
    }
}
