//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT token issuance configuration
//! - `database` - User directory database connection
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server bind configuration
//! - `verify` - SMS verification provider (Twilio Verify) configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;
pub mod verify;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::ServerConfig;
pub use verify::{VerifyConfig, VerifyProviderKind};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// JWT configuration
    pub jwt: JwtConfig,

    /// Verification provider configuration
    pub verify: VerifyConfig,

    /// User directory database, `None` runs against the in-memory directory
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let environment = Environment::default();
        Self {
            environment,
            server: ServerConfig::default(),
            jwt: JwtConfig::default(),
            verify: VerifyConfig::default(),
            database: None,
            logging: LoggingConfig::for_environment(environment),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            jwt: JwtConfig::from_env(),
            verify: VerifyConfig::from_env(),
            database: DatabaseConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }

    /// Settings a production deployment must not start with
    pub fn production_blockers(&self) -> Vec<String> {
        let mut blockers = Vec::new();
        if !self.environment.is_production() {
            return blockers;
        }
        if self.jwt.is_using_default_secret() {
            blockers.push("JWT_SECRET is not set, the development secret is public".to_string());
        }
        if self.verify.provider == VerifyProviderKind::Mock {
            blockers.push("VERIFY_PROVIDER=mock approves every code".to_string());
        }
        blockers
    }

    /// Settings that are allowed in production but worth flagging
    pub fn production_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.environment.is_production() && self.database.is_none() {
            warnings.push("DATABASE_URL is not set, users are served from memory".to_string());
        }
        warnings
    }
}

/// Read an environment variable and parse it, falling back to `default`
/// when it is missing or malformed.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
