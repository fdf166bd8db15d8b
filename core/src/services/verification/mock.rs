//! Mock verification provider for tests

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::value_objects::{VerificationCheck, VerificationStatus};
use crate::errors::{AuthError, DomainError};

use super::traits::VerificationProvider;

/// Provider that answers every check with a configurable status and records
/// the arguments it was called with
#[derive(Clone)]
pub struct MockVerificationProvider {
    status: Arc<Mutex<VerificationStatus>>,
    pub checks: Arc<Mutex<Vec<(String, String)>>>,
    pub starts: Arc<Mutex<Vec<String>>>,
    pub should_fail: bool,
}

impl MockVerificationProvider {
    /// Provider answering every check with `status`
    pub fn new(status: VerificationStatus) -> Self {
        Self {
            status: Arc::new(Mutex::new(status)),
            checks: Arc::new(Mutex::new(Vec::new())),
            starts: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
        }
    }

    pub fn approving() -> Self {
        Self::new(VerificationStatus::Approved)
    }

    /// Provider whose every call fails as if the service were down
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new(VerificationStatus::Pending)
        }
    }

    pub fn set_status(&self, status: VerificationStatus) {
        *self.status.lock().unwrap() = status;
    }

    /// `(to, code)` pairs passed to `check_verification`, in call order
    pub fn recorded_checks(&self) -> Vec<(String, String)> {
        self.checks.lock().unwrap().clone()
    }

    pub fn check_count(&self) -> usize {
        self.checks.lock().unwrap().len()
    }

    pub fn recorded_starts(&self) -> Vec<String> {
        self.starts.lock().unwrap().clone()
    }
}

impl Default for MockVerificationProvider {
    fn default() -> Self {
        Self::approving()
    }
}

#[async_trait]
impl VerificationProvider for MockVerificationProvider {
    async fn start_verification(&self, to: &str) -> Result<VerificationCheck, DomainError> {
        self.starts.lock().unwrap().push(to.to_string());
        if self.should_fail {
            return Err(AuthError::VerificationServiceUnavailable {
                reason: "mock provider failure".to_string(),
            }
            .into());
        }
        Ok(VerificationCheck::new(to, VerificationStatus::Pending).with_sid("VE-mock"))
    }

    async fn check_verification(
        &self,
        to: &str,
        code: &str,
    ) -> Result<VerificationCheck, DomainError> {
        self.checks
            .lock()
            .unwrap()
            .push((to.to_string(), code.to_string()));
        if self.should_fail {
            return Err(AuthError::VerificationServiceUnavailable {
                reason: "mock provider failure".to_string(),
            }
            .into());
        }
        let status = self.status.lock().unwrap().clone();
        Ok(VerificationCheck::new(to, status).with_sid("VE-mock"))
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
