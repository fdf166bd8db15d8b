//! Business services containing domain logic and use cases.

pub mod otp;
pub mod token;
pub mod verification;

// Re-export commonly used types
pub use otp::{validate_code, OtpService, OtpServiceConfig, OTP_CODE_LENGTH};
pub use token::{JwtTokenIssuer, TokenIssuer, TokenServiceConfig};
pub use verification::{MockVerificationProvider, VerificationProvider};
