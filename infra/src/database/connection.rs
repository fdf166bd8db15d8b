//! Connection pool management

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::time::Duration;
use tracing::info;

use otp_shared::DatabaseConfig;

use crate::InfrastructureError;

/// Create a MySQL connection pool
///
/// The pool connects lazily: no connection is opened until the first query,
/// so the service starts even when the database is briefly unavailable.
pub fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    if !config.url.starts_with("mysql://") {
        return Err(InfrastructureError::Config(
            "DATABASE_URL must be a mysql:// URL".to_string(),
        ));
    }

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .connect_lazy(&config.url)?;

    info!(
        "MySQL pool configured (max_connections={})",
        config.max_connections
    );

    Ok(pool)
}
