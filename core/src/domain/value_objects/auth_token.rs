use serde::{Deserialize, Serialize};

/// A freshly issued auth token, returned verbatim to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    /// Signed JWT
    pub token: String,

    /// Token lifetime in seconds
    pub expires_in: i64,

    /// Subject the token was issued for
    pub user_id: String,
}
