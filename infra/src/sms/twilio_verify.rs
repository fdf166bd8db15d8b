//! Twilio Verify Service Implementation
//!
//! Talks to the Twilio Verify v2 REST API:
//!
//! - `POST /Services/{ServiceSid}/Verifications` starts a verification and
//!   sends the code by SMS
//! - `POST /Services/{ServiceSid}/VerificationCheck` checks a code
//!
//! Requests are form-encoded and authenticated with HTTP basic auth
//! (account SID / auth token). No retries are performed: a failed call is
//! reported to the caller as an unavailable provider.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use otp_core::domain::value_objects::{VerificationCheck, VerificationStatus};
use otp_core::errors::{AuthError, DomainError};
use otp_core::services::verification::VerificationProvider;
use otp_shared::phone::mask_phone_number;
use otp_shared::VerifyConfig;

use crate::InfrastructureError;

/// Twilio Verify configuration
#[derive(Debug, Clone)]
pub struct TwilioVerifyConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// Verify service SID
    pub service_sid: String,
    /// API base URL, overridable for tests
    pub base_url: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl TwilioVerifyConfig {
    /// Build from the shared verify configuration, rejecting missing credentials
    pub fn from_verify_config(config: &VerifyConfig) -> Result<Self, InfrastructureError> {
        let missing = config.missing_credentials();
        if !missing.is_empty() {
            return Err(InfrastructureError::Config(format!(
                "{} not set",
                missing.join(", ")
            )));
        }

        Ok(Self {
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            service_sid: config.service_sid.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout_secs: config.request_timeout_secs,
        })
    }

    fn service_url(&self, resource: &str) -> String {
        format!("{}/Services/{}/{}", self.base_url, self.service_sid, resource)
    }
}

/// Verification resource as returned by Twilio
#[derive(Debug, Deserialize)]
struct VerificationResource {
    sid: Option<String>,
    to: Option<String>,
    status: String,
}

/// Error payload Twilio attaches to non-2xx responses
#[derive(Debug, Deserialize)]
struct TwilioErrorBody {
    code: Option<u32>,
    message: Option<String>,
}

/// Twilio Verify provider
pub struct TwilioVerifyProvider {
    client: Client,
    config: TwilioVerifyConfig,
}

impl TwilioVerifyProvider {
    /// Create a new Twilio Verify provider
    pub fn new(config: TwilioVerifyConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            "Twilio Verify provider initialized for service {}",
            config.service_sid
        );

        Ok(Self { client, config })
    }

    async fn post_form(
        &self,
        resource: &str,
        form: &[(&str, &str)],
    ) -> Result<reqwest::Response, DomainError> {
        self.client
            .post(self.config.service_url(resource))
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(form)
            .send()
            .await
            .map_err(|e| {
                error!("Request to Twilio Verify failed: {}", e);
                unavailable(format!("request failed: {}", e))
            })
    }

    async fn parse_resource(
        response: reqwest::Response,
        to: &str,
    ) -> Result<VerificationCheck, DomainError> {
        let resource = response.json::<VerificationResource>().await.map_err(|e| {
            error!("Failed to parse Twilio Verify response: {}", e);
            unavailable(format!("unreadable response: {}", e))
        })?;

        let check = VerificationCheck::new(
            resource.to.unwrap_or_else(|| to.to_string()),
            VerificationStatus::from(resource.status.as_str()),
        );
        Ok(match resource.sid {
            Some(sid) => check.with_sid(sid),
            None => check,
        })
    }

    async fn describe_error(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<TwilioErrorBody>().await {
            Ok(body) => format!(
                "Twilio returned {} (code {}): {}",
                status,
                body.code.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string()),
                body.message.unwrap_or_default()
            ),
            Err(_) => format!("Twilio returned {}", status),
        }
    }
}

#[async_trait]
impl VerificationProvider for TwilioVerifyProvider {
    async fn start_verification(&self, to: &str) -> Result<VerificationCheck, DomainError> {
        debug!("Starting Twilio verification for {}", mask_phone_number(to));

        let response = self
            .post_form("Verifications", &[("To", to), ("Channel", "sms")])
            .await?;

        if !response.status().is_success() {
            let reason = Self::describe_error(response).await;
            error!(
                "Failed to start verification for {}: {}",
                mask_phone_number(to),
                reason
            );
            return Err(unavailable(reason));
        }

        Self::parse_resource(response, to).await
    }

    async fn check_verification(
        &self,
        to: &str,
        code: &str,
    ) -> Result<VerificationCheck, DomainError> {
        debug!("Checking Twilio verification for {}", mask_phone_number(to));

        let response = self
            .post_form("VerificationCheck", &[("To", to), ("Code", code)])
            .await?;

        match response.status() {
            status if status.is_success() => Self::parse_resource(response, to).await,
            // No pending verification: never started, already approved, or expired
            StatusCode::NOT_FOUND => {
                warn!(
                    "No pending verification for {}, treating as expired",
                    mask_phone_number(to)
                );
                Ok(VerificationCheck::new(to, VerificationStatus::Expired))
            }
            StatusCode::TOO_MANY_REQUESTS => {
                warn!("Too many check attempts for {}", mask_phone_number(to));
                Ok(VerificationCheck::new(
                    to,
                    VerificationStatus::MaxAttemptsReached,
                ))
            }
            _ => {
                let reason = Self::describe_error(response).await;
                error!(
                    "Verification check for {} failed: {}",
                    mask_phone_number(to),
                    reason
                );
                Err(unavailable(reason))
            }
        }
    }

    fn provider_name(&self) -> &str {
        "Twilio Verify"
    }
}

fn unavailable(reason: String) -> DomainError {
    DomainError::Auth(AuthError::VerificationServiceUnavailable { reason })
}
