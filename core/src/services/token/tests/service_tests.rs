use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::domain::entities::token::{Claims, MAX_TOKEN_EXPIRY_SECONDS};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{JwtTokenIssuer, TokenIssuer, TokenServiceConfig};

fn issuer_with(config: TokenServiceConfig) -> JwtTokenIssuer {
    JwtTokenIssuer::new(config)
}

fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: "test_secret".to_string(),
        expiry_seconds: 3600,
        ..Default::default()
    }
}

#[test]
fn test_issue_and_verify() {
    let issuer = issuer_with(test_config());
    let user = User::new("user123", "+919999999999");

    let token = issuer.issue(&user).unwrap();
    assert_eq!(token.user_id, "user123");
    assert_eq!(token.expires_in, 3600);
    assert_eq!(token.token.split('.').count(), 3);

    let claims = issuer.verify(&token.token).unwrap();
    assert_eq!(claims.sub, "user123");
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn test_tokens_are_unique_per_issue() {
    let issuer = issuer_with(test_config());
    let user = User::new("user123", "+919999999999");

    let first = issuer.issue(&user).unwrap();
    let second = issuer.issue(&user).unwrap();
    assert_ne!(first.token, second.token);
}

#[test]
fn test_verify_rejects_wrong_secret() {
    let issuer = issuer_with(test_config());
    let other = issuer_with(TokenServiceConfig {
        jwt_secret: "another_secret".to_string(),
        ..test_config()
    });
    let token = other.issue(&User::new("user123", "+919999999999")).unwrap();

    let result = issuer.verify(&token.token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[test]
fn test_verify_rejects_expired_token() {
    let config = test_config();
    let issuer = issuer_with(config.clone());
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: "user123".to_string(),
        iat: now - 120,
        exp: now - 30,
        nbf: now - 120,
        iss: config.issuer.clone(),
        aud: config.audience.clone(),
        jti: "expired".to_string(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .unwrap();

    let result = issuer.verify(&token);
    assert!(matches!(result, Err(DomainError::Token(TokenError::TokenExpired))));
}

#[test]
fn test_issue_fails_for_unrepresentable_lifetime() {
    let issuer = issuer_with(TokenServiceConfig {
        expiry_seconds: i64::MAX,
        ..test_config()
    });
    let result = issuer.issue(&User::new("user123", "+919999999999"));
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::TokenGenerationFailed))
    ));
}

#[test]
fn test_issue_fails_for_non_positive_lifetime() {
    for expiry_seconds in [0, -30, MAX_TOKEN_EXPIRY_SECONDS + 1] {
        let issuer = issuer_with(TokenServiceConfig {
            expiry_seconds,
            ..test_config()
        });
        assert!(issuer.issue(&User::new("user123", "+919999999999")).is_err());
    }
}

#[test]
fn test_verify_rejects_wrong_audience() {
    let issuer = issuer_with(test_config());
    let other = issuer_with(TokenServiceConfig {
        audience: "someone-else".to_string(),
        ..test_config()
    });
    let token = other.issue(&User::new("user123", "+919999999999")).unwrap();

    let result = issuer.verify(&token.token);
    assert!(matches!(result, Err(DomainError::Token(TokenError::InvalidClaims))));
}

#[test]
fn test_verify_rejects_garbage() {
    let issuer = issuer_with(test_config());
    let result = issuer.verify("not-a-jwt");
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidTokenFormat))
    ));
}
