//! Token entities for JWT-based authentication.

use chrono::{TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::TokenError;

/// Auth token expiration time (7 days)
pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Longest lifetime a token may be issued with (365 days)
pub const MAX_TOKEN_EXPIRY_SECONDS: i64 = 365 * 24 * 60 * 60;

/// JWT issuer
pub const JWT_ISSUER: &str = "otp-verify";

/// JWT audience
pub const JWT_AUDIENCE: &str = "otp-verify-api";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID, fresh for every issued token
    pub jti: String,
}

impl Claims {
    /// Creates new claims for an auth token
    ///
    /// # Arguments
    ///
    /// * `user_id` - Directory id of the authenticated user
    /// * `expiry_seconds` - Lifetime of the token, within `1..=MAX_TOKEN_EXPIRY_SECONDS`
    /// * `issuer` - `iss` claim
    /// * `audience` - `aud` claim
    ///
    /// # Errors
    ///
    /// `TokenError::TokenGenerationFailed` when the lifetime is out of range
    pub fn new(
        user_id: impl Into<String>,
        expiry_seconds: i64,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Result<Self, TokenError> {
        if !(1..=MAX_TOKEN_EXPIRY_SECONDS).contains(&expiry_seconds) {
            return Err(TokenError::TokenGenerationFailed);
        }

        let now = Utc::now();
        let expiry = TimeDelta::try_seconds(expiry_seconds)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or(TokenError::TokenGenerationFailed)?;

        Ok(Self {
            sub: user_id.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: issuer.into(),
            aud: audience.into(),
            jti: Uuid::new_v4().to_string(),
        })
    }
}
