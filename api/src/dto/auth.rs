use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Exactly six ASCII digits
pub static OTP_CODE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{6}$").unwrap());

/// Query string of `/auth/otpverify` and `/auth/otpsend`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MobileNumberQuery {
    /// Local 10-digit number or full E.164 number
    /// Examples: "9999999999", "+919999999999"
    #[serde(default)]
    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub mobile_number: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OtpVerifyRequest {
    /// 6-digit code received by SMS
    #[serde(default)]
    #[validate(
        length(equal = 6, message = "OTP must be exactly 6 digits"),
        regex(path = *OTP_CODE_REGEX, message = "OTP must contain only digits")
    )]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpVerifyResponse {
    pub success: bool,
    pub auth_token: String,
    pub expires_in: i64, // seconds
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpSendResponse {
    pub success: bool,
    pub status: String, // provider status, normally "pending"
}
