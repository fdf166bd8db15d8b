//! Runtime wiring: picks the collaborator implementations named by
//! `AppConfig` and assembles the application state.

use std::sync::Arc;

use otp_core::domain::entities::User;
use otp_core::repositories::{InMemoryUserRepository, UserRepository};
use otp_core::services::otp::{OtpService, OtpServiceConfig};
use otp_core::services::token::{JwtTokenIssuer, TokenServiceConfig};
use otp_core::services::verification::{DevVerificationProvider, VerificationProvider};
use otp_infra::{create_pool, MySqlUserRepository, TwilioVerifyConfig, TwilioVerifyProvider};
use otp_shared::phone::{mask_phone_number, to_e164};
use otp_shared::{AppConfig, VerifyProviderKind};

use crate::routes::auth::AppState;

/// Application state with collaborators chosen at start-up
pub type ServerState = AppState<dyn VerificationProvider, dyn UserRepository, JwtTokenIssuer>;

/// Parse `DEV_USERS`-style seed data: `id:phone` pairs separated by commas
///
/// Phone numbers are normalized like request input; malformed entries are
/// skipped with a warning.
pub fn parse_seed_users(raw: &str, default_country_code: &str) -> Vec<User> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let parsed = entry.split_once(':').and_then(|(id, phone)| {
                let id = id.trim();
                if id.is_empty() {
                    return None;
                }
                to_e164(phone.trim(), default_country_code).map(|phone| User::new(id, phone))
            });
            if parsed.is_none() {
                log::warn!("Ignoring malformed DEV_USERS entry: {}", entry);
            }
            parsed
        })
        .collect()
}

fn build_provider(config: &AppConfig) -> anyhow::Result<Arc<dyn VerificationProvider>> {
    let provider: Arc<dyn VerificationProvider> = match config.verify.provider {
        VerifyProviderKind::Twilio => {
            let twilio = TwilioVerifyConfig::from_verify_config(&config.verify)?;
            Arc::new(TwilioVerifyProvider::new(twilio)?)
        }
        VerifyProviderKind::Mock => {
            log::warn!("Using development verification provider: every code is approved");
            Arc::new(DevVerificationProvider::new())
        }
    };
    Ok(provider)
}

fn build_user_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn UserRepository>> {
    if let Some(database) = &config.database {
        let pool = create_pool(database)?;
        return Ok(Arc::new(MySqlUserRepository::new(pool)));
    }

    let seed = std::env::var("DEV_USERS").unwrap_or_default();
    let users = parse_seed_users(&seed, &config.verify.default_country_code);
    for user in &users {
        log::info!("Seeding user {} ({})", user.id, mask_phone_number(&user.phone));
    }
    log::warn!("DATABASE_URL not set, serving users from memory");
    Ok(Arc::new(InMemoryUserRepository::from_users(users)))
}

/// Build the application state described by `config`
///
/// Fails without touching any collaborator when a production configuration
/// would accept unverified codes or sign with the development secret.
pub fn build_state(config: &AppConfig) -> anyhow::Result<ServerState> {
    let blockers = config.production_blockers();
    if !blockers.is_empty() {
        anyhow::bail!("unsafe production configuration: {}", blockers.join("; "));
    }

    let provider = build_provider(config)?;
    let users = build_user_repository(config)?;
    let tokens = Arc::new(JwtTokenIssuer::new(TokenServiceConfig::from(&config.jwt)));

    let service = OtpService::new(
        provider,
        users,
        tokens,
        OtpServiceConfig::from(&config.verify),
    );
    Ok(AppState::new(service))
}
