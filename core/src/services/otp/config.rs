//! Configuration for the OTP service

use otp_shared::VerifyConfig;

/// Number of digits in an OTP
pub const OTP_CODE_LENGTH: usize = 6;

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Country code prefixed to numbers supplied without one
    pub default_country_code: String,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            default_country_code: "+91".to_string(),
        }
    }
}

impl From<&VerifyConfig> for OtpServiceConfig {
    fn from(config: &VerifyConfig) -> Self {
        Self {
            default_country_code: config.default_country_code.clone(),
        }
    }
}
