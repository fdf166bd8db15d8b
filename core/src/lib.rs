//! # OTP Verify Core
//!
//! Core business logic and domain layer for the OTP verify backend.
//! This crate contains domain entities, the collaborator interfaces
//! (verification provider, user directory, token issuer), the OTP service
//! orchestrating them, and the error types shared by every layer.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
