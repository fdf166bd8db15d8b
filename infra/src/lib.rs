//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the OTP service depends on:
//!
//! - **SMS**: Twilio Verify v2 client implementing `VerificationProvider`
//! - **Database**: MySQL user directory implementing `UserRepository`
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

use otp_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// SMS verification providers
pub mod sms;

#[cfg(feature = "mysql")]
pub use database::{create_pool, MySqlUserRepository};
pub use sms::{TwilioVerifyConfig, TwilioVerifyProvider};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Internal {
            message: err.to_string(),
        }
    }
}
