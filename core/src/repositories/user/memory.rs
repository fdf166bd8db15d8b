//! In-memory user directory for deployments without a database

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// User directory held in process memory, keyed by E.164 phone number
///
/// Unlike `MockUserRepository` it keeps no record of lookups, so it is safe
/// to serve live traffic from.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory holding `users`; a later entry replaces an earlier
    /// one with the same phone number
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.phone.clone(), user))
            .collect();
        Self {
            users: RwLock::new(users),
        }
    }

    /// Number of registered users
    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().map_err(|_| DomainError::Internal {
            message: "User directory lock poisoned".to_string(),
        })?;
        Ok(users.get(phone).cloned())
    }
}
