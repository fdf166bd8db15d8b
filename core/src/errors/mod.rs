//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// One or more request fields violate their shape constraints
    #[error("Invalid input: {}", summarize(.errors))]
    InvalidInput { errors: Vec<ValidationError> },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Wrap a single field violation
    pub fn invalid(error: ValidationError) -> Self {
        DomainError::InvalidInput {
            errors: vec![error],
        }
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::invalid(err)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = DomainError::InvalidInput {
            errors: vec![
                ValidationError::RequiredField {
                    field: "mobile_number".to_string(),
                },
                ValidationError::PatternMismatch {
                    field: "code".to_string(),
                },
            ],
        };
        let message = err.to_string();
        assert!(message.contains("mobile_number"));
        assert!(message.contains("code"));
    }

    #[test]
    fn test_bridged_errors_keep_their_message() {
        assert_eq!(DomainError::from(AuthError::InvalidOtp).to_string(), "Invalid OTP");
        assert_eq!(
            DomainError::from(TokenError::TokenGenerationFailed).to_string(),
            "Token generation failed"
        );
    }
}
