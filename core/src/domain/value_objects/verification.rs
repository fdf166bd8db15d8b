//! Verification results reported by the SMS verification provider.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Status of a verification as reported by the provider.
///
/// Only [`VerificationStatus::Approved`] means the code was correct; every
/// other value is a rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationStatus {
    Pending,
    Approved,
    Canceled,
    MaxAttemptsReached,
    Expired,
    Failed,
    /// Any status string this service does not know about
    Other(String),
}

impl VerificationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Approved => "approved",
            VerificationStatus::Canceled => "canceled",
            VerificationStatus::MaxAttemptsReached => "max_attempts_reached",
            VerificationStatus::Expired => "expired",
            VerificationStatus::Failed => "failed",
            VerificationStatus::Other(status) => status,
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, VerificationStatus::Approved)
    }
}

impl From<&str> for VerificationStatus {
    fn from(status: &str) -> Self {
        match status {
            "pending" => VerificationStatus::Pending,
            "approved" => VerificationStatus::Approved,
            "canceled" => VerificationStatus::Canceled,
            "max_attempts_reached" => VerificationStatus::MaxAttemptsReached,
            "expired" => VerificationStatus::Expired,
            "failed" => VerificationStatus::Failed,
            other => VerificationStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for VerificationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VerificationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let status = String::deserialize(deserializer)?;
        Ok(VerificationStatus::from(status.as_str()))
    }
}

/// Outcome of a provider call for one phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCheck {
    /// Provider-side verification id, when the provider returns one
    pub sid: Option<String>,

    /// Phone number the verification targets (E.164)
    pub to: String,

    pub status: VerificationStatus,
}

impl VerificationCheck {
    pub fn new(to: impl Into<String>, status: VerificationStatus) -> Self {
        Self {
            sid: None,
            to: to.into(),
            status,
        }
    }

    pub fn with_sid(mut self, sid: impl Into<String>) -> Self {
        self.sid = Some(sid.into());
        self
    }

    pub fn is_approved(&self) -> bool {
        self.status.is_approved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_approved_is_success() {
        assert!(VerificationStatus::from("approved").is_approved());
        for status in ["pending", "canceled", "expired", "denied", "APPROVED", ""] {
            assert!(!VerificationStatus::from(status).is_approved(), "{status}");
        }
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let status = VerificationStatus::from("denied");
        assert_eq!(status, VerificationStatus::Other("denied".to_string()));
        assert_eq!(status.to_string(), "denied");
    }

    #[test]
    fn test_status_serde() {
        let check: VerificationCheck = serde_json::from_value(serde_json::json!({
            "sid": "VE123",
            "to": "+919999999999",
            "status": "max_attempts_reached"
        }))
        .unwrap();
        assert_eq!(check.status, VerificationStatus::MaxAttemptsReached);

        let value = serde_json::to_value(&check).unwrap();
        assert_eq!(value["status"], "max_attempts_reached");
    }
}
