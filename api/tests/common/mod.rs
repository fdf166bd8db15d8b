//! Shared fixtures for the API integration tests

#![allow(dead_code)]

use actix_web::web;
use std::sync::Arc;

use otp_api::routes::auth::AppState;
use otp_core::domain::entities::User;
use otp_core::domain::value_objects::VerificationStatus;
use otp_core::repositories::MockUserRepository;
use otp_core::services::otp::{OtpService, OtpServiceConfig};
use otp_core::services::token::{JwtTokenIssuer, TokenServiceConfig};
use otp_core::services::verification::MockVerificationProvider;
use otp_shared::AppConfig;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_only";

pub type TestState = AppState<MockVerificationProvider, MockUserRepository, JwtTokenIssuer>;

/// Mocks kept by the test so it can inspect calls after the request
pub struct TestContext {
    pub provider: MockVerificationProvider,
    pub users: MockUserRepository,
    pub state: web::Data<TestState>,
    pub config: AppConfig,
}

pub fn token_config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: TEST_SECRET.to_string(),
        ..TokenServiceConfig::default()
    }
}

/// Helper function to create test application state
pub fn create_test_context(
    provider: MockVerificationProvider,
    users: MockUserRepository,
) -> TestContext {
    let service = OtpService::new(
        Arc::new(provider.clone()),
        Arc::new(users.clone()),
        Arc::new(JwtTokenIssuer::new(token_config())),
        OtpServiceConfig::default(),
    );

    TestContext {
        provider,
        users,
        state: web::Data::new(AppState::new(service)),
        config: AppConfig::default(),
    }
}

/// The directory holds `user123` under +919999999999
pub fn registered_users() -> MockUserRepository {
    MockUserRepository::new().with_user(User::new("user123", "+919999999999"))
}

pub fn provider_answering(status: VerificationStatus) -> MockVerificationProvider {
    MockVerificationProvider::new(status)
}
