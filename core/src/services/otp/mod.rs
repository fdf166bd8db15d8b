//! OTP login service
//!
//! Orchestrates one verification request: validate the input shape,
//! normalize the phone number, ask the provider to check the code, look the
//! user up and issue an auth token.

mod config;
mod service;


pub use config::{OtpServiceConfig, OTP_CODE_LENGTH};
pub use service::{validate_code, OtpService};
