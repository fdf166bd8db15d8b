//! SMS verification provider configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Which verification provider backs the OTP endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerifyProviderKind {
    /// Twilio Verify v2
    Twilio,
    /// Local provider that approves every well-formed code
    Mock,
}

impl std::str::FromStr for VerifyProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "twilio" => Ok(VerifyProviderKind::Twilio),
            "mock" => Ok(VerifyProviderKind::Mock),
            _ => Err(format!("Invalid verify provider: {}", s)),
        }
    }
}

/// Twilio Verify configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerifyConfig {
    /// Provider selection
    pub provider: VerifyProviderKind,

    /// Twilio Account SID
    pub account_sid: String,

    /// Twilio Auth Token
    pub auth_token: String,

    /// Verify service SID (`VA...`)
    pub service_sid: String,

    /// Base URL of the Verify API
    pub base_url: String,

    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,

    /// Country code prefixed to local numbers
    pub default_country_code: String,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            provider: VerifyProviderKind::Mock,
            account_sid: String::new(),
            auth_token: String::new(),
            service_sid: String::new(),
            base_url: String::from("https://verify.twilio.com/v2"),
            request_timeout_secs: 30,
            default_country_code: String::from("+91"),
        }
    }
}

impl VerifyConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: env_or("VERIFY_PROVIDER", defaults.provider),
            account_sid: std::env::var("TWILIO_ACCOUNT_SID").unwrap_or(defaults.account_sid),
            auth_token: std::env::var("TWILIO_AUTH_TOKEN").unwrap_or(defaults.auth_token),
            service_sid: std::env::var("TWILIO_VERIFY_SERVICE_SID")
                .unwrap_or(defaults.service_sid),
            base_url: std::env::var("TWILIO_VERIFY_BASE_URL").unwrap_or(defaults.base_url),
            request_timeout_secs: env_or(
                "TWILIO_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            ),
            default_country_code: std::env::var("DEFAULT_COUNTRY_CODE")
                .unwrap_or(defaults.default_country_code),
        }
    }

    /// Names of the Twilio settings that are still empty
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.account_sid.is_empty() {
            missing.push("TWILIO_ACCOUNT_SID");
        }
        if self.auth_token.is_empty() {
            missing.push("TWILIO_AUTH_TOKEN");
        }
        if self.service_sid.is_empty() {
            missing.push("TWILIO_VERIFY_SERVICE_SID");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parsing() {
        assert_eq!("twilio".parse::<VerifyProviderKind>(), Ok(VerifyProviderKind::Twilio));
        assert_eq!("MOCK".parse::<VerifyProviderKind>(), Ok(VerifyProviderKind::Mock));
        assert!("sns".parse::<VerifyProviderKind>().is_err());
    }

    #[test]
    fn test_missing_credentials() {
        let mut config = VerifyConfig::default();
        assert_eq!(config.missing_credentials().len(), 3);

        config.account_sid = "AC123".to_string();
        config.auth_token = "token".to_string();
        config.service_sid = "VA123".to_string();
        assert!(config.missing_credentials().is_empty());
    }
}
