//! Local development verification provider

use async_trait::async_trait;

use crate::domain::value_objects::{VerificationCheck, VerificationStatus};
use crate::errors::DomainError;

use super::traits::VerificationProvider;

/// Provider that sends nothing and approves every well-formed code
///
/// Holds no state, so it can sit behind a long-running server without
/// accumulating phone numbers or codes. Refused in production by
/// `AppConfig::production_blockers`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevVerificationProvider;

impl DevVerificationProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl VerificationProvider for DevVerificationProvider {
    async fn start_verification(&self, to: &str) -> Result<VerificationCheck, DomainError> {
        tracing::debug!("Development provider skipping SMS delivery");
        Ok(VerificationCheck::new(to, VerificationStatus::Pending).with_sid("VE-dev"))
    }

    async fn check_verification(
        &self,
        to: &str,
        _code: &str,
    ) -> Result<VerificationCheck, DomainError> {
        Ok(VerificationCheck::new(to, VerificationStatus::Approved).with_sid("VE-dev"))
    }

    fn provider_name(&self) -> &str {
        "Development"
    }
}
