//! MySQL implementation of the UserRepository trait.
//!
//! The directory is read-only from this service's point of view: a single
//! lookup by normalized phone number.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use tracing::{debug, error};

use otp_core::domain::entities::User;
use otp_core::errors::DomainError;
use otp_core::repositories::UserRepository;
use otp_shared::phone::mask_phone_number;

const FIND_BY_PHONE: &str = "SELECT id, phone FROM users WHERE phone = ? LIMIT 1";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;
        let phone: String = row.try_get("phone").map_err(|e| DomainError::Internal {
            message: format!("Failed to get phone: {}", e),
        })?;

        Ok(User::new(id, phone))
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
        debug!("Looking up user {}", mask_phone_number(phone));

        let row = sqlx::query(FIND_BY_PHONE)
            .bind(phone)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("User lookup failed: {}", e);
                DomainError::Internal {
                    message: format!("Failed to find user by phone: {}", e),
                }
            })?;

        row.as_ref().map(Self::row_to_user).transpose()
    }
}
