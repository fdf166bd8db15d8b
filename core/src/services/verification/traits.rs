//! Trait for SMS verification provider integration

use async_trait::async_trait;

use crate::domain::value_objects::VerificationCheck;
use crate::errors::DomainError;

/// External service that sends OTPs and checks them against a phone number
#[async_trait]
pub trait VerificationProvider: Send + Sync {
    /// Start a verification, sending a fresh code by SMS to `to` (E.164)
    async fn start_verification(&self, to: &str) -> Result<VerificationCheck, DomainError>;

    /// Check `code` against the pending verification for `to` (E.164)
    ///
    /// Transport or provider failures are errors; a wrong code is not, it
    /// comes back as a non-approved status.
    async fn check_verification(
        &self,
        to: &str,
        code: &str,
    ) -> Result<VerificationCheck, DomainError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;
}
