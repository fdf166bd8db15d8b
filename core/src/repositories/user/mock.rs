//! Recording implementation of UserRepository for tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Mock user repository that records every lookup
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<Mutex<HashMap<String, User>>>,
    lookups: Arc<Mutex<Vec<String>>>,
    should_fail: bool,
}

impl MockUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository whose lookups always fail
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Register a user, keyed by its phone number
    pub fn with_user(self, user: User) -> Self {
        self.insert(user);
        self
    }

    pub fn insert(&self, user: User) {
        self.users.lock().unwrap().insert(user.phone.clone(), user);
    }

    /// Phone numbers passed to `find_by_phone`, in call order
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
        self.lookups.lock().unwrap().push(phone.to_string());

        if self.should_fail {
            return Err(DomainError::Internal {
                message: "User directory unavailable".to_string(),
            });
        }

        Ok(self.users.lock().unwrap().get(phone).cloned())
    }
}
