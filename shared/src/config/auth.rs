//! Authentication token configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// Longest accepted `JWT_EXPIRY_SECONDS` (365 days)
const MAX_EXPIRY_SECONDS: i64 = 365 * 24 * 60 * 60;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens (HS256)
    pub secret: String,

    /// Auth token expiry time in seconds
    pub expiry_seconds: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            expiry_seconds: 604800, // 7 days
            issuer: String::from("otp-verify"),
            audience: String::from("otp-verify-api"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: std::env::var("JWT_SECRET").unwrap_or(defaults.secret),
            expiry_seconds: parse_expiry(std::env::var("JWT_EXPIRY_SECONDS").ok().as_deref())
                .unwrap_or(defaults.expiry_seconds),
            issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or(defaults.audience),
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Parse a token lifetime, rejecting values outside `1..=MAX_EXPIRY_SECONDS`
fn parse_expiry(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|secs| (1..=MAX_EXPIRY_SECONDS).contains(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_defaults() {
        let config = JwtConfig::default();
        assert!(config.is_using_default_secret());
        assert_eq!(config.expiry_seconds, 7 * 24 * 3600);

        let config = JwtConfig::new("s3cr3t");
        assert!(!config.is_using_default_secret());
        assert_eq!(config.expiry_seconds, 604800);
    }

    #[test]
    fn test_parse_expiry_bounds() {
        assert_eq!(parse_expiry(Some("900")), Some(900));
        assert_eq!(parse_expiry(Some(" 31536000 ")), Some(MAX_EXPIRY_SECONDS));
        assert_eq!(parse_expiry(Some("0")), None);
        assert_eq!(parse_expiry(Some("-60")), None);
        assert_eq!(parse_expiry(Some("31536001")), None);
        assert_eq!(parse_expiry(Some("9223372036854775807")), None);
        assert_eq!(parse_expiry(Some("soon")), None);
        assert_eq!(parse_expiry(None), None);
    }
}
