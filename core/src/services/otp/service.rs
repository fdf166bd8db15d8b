//! Main OTP service implementation

use std::sync::Arc;

use otp_shared::phone::{mask_phone_number, to_e164};
use tracing::{debug, info, warn};

use crate::domain::value_objects::{AuthToken, VerificationCheck};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::token::TokenIssuer;
use crate::services::verification::VerificationProvider;

use super::config::{OtpServiceConfig, OTP_CODE_LENGTH};

/// OTP login service.
///
/// Collaborators are injected as `Arc`s; unsized trait objects are accepted
/// so the binary can pick implementations at runtime.
pub struct OtpService<P, U, T>
where
    P: VerificationProvider + ?Sized,
    U: UserRepository + ?Sized,
    T: TokenIssuer + ?Sized,
{
    /// External provider checking codes
    provider: Arc<P>,
    /// User directory
    user_repository: Arc<U>,
    /// Auth token issuer
    token_issuer: Arc<T>,
    config: OtpServiceConfig,
}

impl<P, U, T> OtpService<P, U, T>
where
    P: VerificationProvider + ?Sized,
    U: UserRepository + ?Sized,
    T: TokenIssuer + ?Sized,
{
    /// Create a new OTP service
    ///
    /// # Arguments
    ///
    /// * `provider` - Verification provider, sole authority on code correctness
    /// * `user_repository` - Directory resolving phone numbers to users
    /// * `token_issuer` - Signs the auth token handed back on success
    /// * `config` - Service configuration
    pub fn new(
        provider: Arc<P>,
        user_repository: Arc<U>,
        token_issuer: Arc<T>,
        config: OtpServiceConfig,
    ) -> Self {
        Self {
            provider,
            user_repository,
            token_issuer,
            config,
        }
    }

    /// Send an OTP to `mobile_number`
    ///
    /// # Returns
    ///
    /// * `Ok(VerificationCheck)` - The provider accepted the request
    /// * `Err(DomainError::InvalidInput)` - The number cannot be normalized
    /// * `Err(DomainError::Auth)` - The provider is unavailable
    pub async fn send_otp(&self, mobile_number: &str) -> DomainResult<VerificationCheck> {
        let phone = self
            .normalize_mobile_number(mobile_number)
            .map_err(DomainError::invalid)?;

        info!(
            "Starting verification for {} via {}",
            mask_phone_number(&phone),
            self.provider.provider_name()
        );

        let check = self.provider.start_verification(&phone).await?;
        debug!(
            "Verification for {} is {}",
            mask_phone_number(&phone),
            check.status
        );
        Ok(check)
    }

    /// Verify `code` for `mobile_number` and issue an auth token
    ///
    /// This method:
    /// 1. Validates the code shape and the phone number before any external call
    /// 2. Normalizes the phone number to E.164 exactly once
    /// 3. Asks the provider to check the code
    /// 4. Looks up the user owning the phone number
    /// 5. Issues a fresh auth token for that user
    ///
    /// # Returns
    ///
    /// * `Ok(AuthToken)` - Code approved and user found
    /// * `Err(DomainError::InvalidInput)` - Malformed code or phone number
    /// * `Err(DomainError::Auth(AuthError::InvalidOtp))` - Provider did not approve
    /// * `Err(DomainError::Auth(AuthError::UserNotFound))` - Approved but no such user
    /// * `Err(DomainError::Auth(AuthError::VerificationServiceUnavailable))` - Provider failure
    /// * `Err(DomainError::Internal)` - Directory failure
    pub async fn verify_otp(&self, mobile_number: &str, code: &str) -> DomainResult<AuthToken> {
        let mut errors = Vec::new();
        let phone = match self.normalize_mobile_number(mobile_number) {
            Ok(phone) => Some(phone),
            Err(e) => {
                errors.push(e);
                None
            }
        };
        if let Err(e) = validate_code(code) {
            errors.push(e);
        }
        let phone = match phone {
            Some(phone) if errors.is_empty() => phone,
            _ => return Err(DomainError::InvalidInput { errors }),
        };

        let masked = mask_phone_number(&phone);
        let check = self.provider.check_verification(&phone, code).await?;
        if !check.is_approved() {
            info!("OTP for {} not approved (status: {})", masked, check.status);
            return Err(AuthError::InvalidOtp.into());
        }

        let user = match self.user_repository.find_by_phone(&phone).await? {
            Some(user) => user,
            None => {
                warn!("OTP approved for {} but no user is registered", masked);
                return Err(AuthError::UserNotFound.into());
            }
        };

        let token = self.token_issuer.issue(&user)?;
        info!("OTP verified for {}, issued token for user {}", masked, user.id);
        Ok(token)
    }

    /// Normalize a user-supplied mobile number to E.164
    pub fn normalize_mobile_number(&self, mobile_number: &str) -> Result<String, ValidationError> {
        if mobile_number.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "mobile_number".to_string(),
            });
        }
        to_e164(mobile_number, &self.config.default_country_code).ok_or_else(|| {
            ValidationError::InvalidFormat {
                field: "mobile_number".to_string(),
            }
        })
    }
}

/// Check that `code` is exactly [`OTP_CODE_LENGTH`] ASCII digits
pub fn validate_code(code: &str) -> Result<(), ValidationError> {
    if code.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "code".to_string(),
        });
    }
    let length = code.chars().count();
    if length != OTP_CODE_LENGTH {
        return Err(ValidationError::InvalidLength {
            field: "code".to_string(),
            expected: OTP_CODE_LENGTH,
            actual: length,
        });
    }
    if !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PatternMismatch {
            field: "code".to_string(),
        });
    }
    Ok(())
}
