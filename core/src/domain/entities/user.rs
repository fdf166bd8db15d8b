//! User entity as returned by the user directory.

use serde::{Deserialize, Serialize};

/// A registered user, identified by an opaque directory id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Directory identifier, embedded as the token subject
    pub id: String,

    /// Mobile number in E.164 format
    pub phone: String,
}

impl User {
    /// Creates a new User instance
    pub fn new(id: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            phone: phone.into(),
        }
    }
}
