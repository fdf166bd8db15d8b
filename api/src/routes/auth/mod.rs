//! Authentication route handlers
//!
//! - `POST /auth/otpsend` starts an SMS verification
//! - `POST /auth/otpverify` checks the code and issues an auth token

pub mod otp_send;
pub mod otp_verify;

use std::sync::Arc;

use otp_core::repositories::UserRepository;
use otp_core::services::otp::OtpService;
use otp_core::services::token::TokenIssuer;
use otp_core::services::verification::VerificationProvider;

/// Application state that holds shared services
pub struct AppState<P, U, T>
where
    P: VerificationProvider + ?Sized,
    U: UserRepository + ?Sized,
    T: TokenIssuer + ?Sized,
{
    pub otp_service: Arc<OtpService<P, U, T>>,
}

impl<P, U, T> AppState<P, U, T>
where
    P: VerificationProvider + ?Sized,
    U: UserRepository + ?Sized,
    T: TokenIssuer + ?Sized,
{
    pub fn new(otp_service: OtpService<P, U, T>) -> Self {
        Self {
            otp_service: Arc::new(otp_service),
        }
    }
}
