//! Shared utilities and common types for the OTP verify server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Phone number normalization and masking

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig, ServerConfig,
    VerifyConfig, VerifyProviderKind,
};
pub use utils::phone;
