//! JWT token issuer implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthToken;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Issues signed auth tokens for verified users
pub trait TokenIssuer: Send + Sync {
    /// Create a new token asserting the identity of `user`
    fn issue(&self, user: &User) -> Result<AuthToken, DomainError>;
}

/// HS256 JWT issuer
pub struct JwtTokenIssuer {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenIssuer {
    /// Creates a new token issuer
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "iss", "aud"]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Verifies a token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The token is authentic and currently valid
    /// * `Err(DomainError::Token)` - Expired, tampered or malformed token
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let err = match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    ErrorKind::InvalidIssuer
                    | ErrorKind::InvalidAudience
                    | ErrorKind::ImmatureSignature
                    | ErrorKind::MissingRequiredClaim(_) => TokenError::InvalidClaims,
                    _ => TokenError::InvalidTokenFormat,
                };
                DomainError::Token(err)
            })
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user: &User) -> Result<AuthToken, DomainError> {
        let claims = Claims::new(
            user.id.clone(),
            self.config.expiry_seconds,
            self.config.issuer.clone(),
            self.config.audience.clone(),
        )
        .map_err(|e| {
            tracing::error!(
                "Refusing to issue token with lifetime {}s",
                self.config.expiry_seconds
            );
            DomainError::Token(e)
        })?;

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(
            |e| {
                tracing::error!("Failed to sign auth token: {}", e);
                DomainError::Token(TokenError::TokenGenerationFailed)
            },
        )?;

        Ok(AuthToken {
            token,
            expires_in: self.config.expiry_seconds,
            user_id: user.id.clone(),
        })
    }
}
