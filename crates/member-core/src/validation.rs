//! Validation utilities.

use crate::{FieldError, MemberError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `MemberError` on failure.
    fn validate_request(&self) -> Result<(), MemberError> {
        self.validate().map_err(validation_errors_to_member_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Flattens `validator::ValidationErrors` into field errors.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect();

    // HashMap iteration order is not stable
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    field_errors
}

/// Converts `validator::ValidationErrors` to `MemberError`.
#[must_use]
pub fn validation_errors_to_member_error(errors: ValidationErrors) -> MemberError {
    let message = field_errors(&errors)
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    MemberError::Validation(message)
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

    /// Validates a telephone number: digits with optional `+`, `-` and spaces.
    pub fn telephone(value: &str) -> Result<(), ValidationError> {
        let digits = value.chars().filter(char::is_ascii_digit).count();
        if digits == 0 {
            return Err(ValidationError::new("telephone_no_digits"));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_digit() || c == '-' || c == '+' || c == ' ')
        {
            return Err(ValidationError::new("telephone_invalid_characters"));
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
    struct Probe {
        #[validate(length(min = 1, message = "name is required"))]
        name: String,
        #[validate(range(max = 10))]
        size: u32,
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_telephone() {
        assert!(telephone("010-1234-5678").is_ok());
        assert!(telephone("+82 10 1234 5678").is_ok());
        assert!(telephone("---").is_err());
        assert!(telephone("call me").is_err());
    }

    #[test]
    fn test_validate_request_collects_messages() {
        let probe = Probe {
            name: String::new(),
            size: 11,
        };
        let err = probe.validate_request().unwrap_err();
        match err {
            MemberError::Validation(msg) => {
                assert!(msg.starts_with("name: name is required"));
                assert!(msg.contains("size: range"));
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_request_ok() {
        let probe = Probe {
            name: "ok".to_string(),
            size: 3,
        };
        assert!(probe.validate_request().is_ok());
    }
}
