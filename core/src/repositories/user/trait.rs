//! User directory interface.
//!
//! The OTP flow only needs to resolve a verified phone number to the user it
//! belongs to; account creation and updates live outside this service.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Read-only user directory keyed by phone number
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use otp_core::repositories::UserRepository;
/// use otp_core::domain::entities::user::User;
/// use otp_core::errors::DomainError;
///
/// struct MySqlUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for MySqlUserRepository {
///     async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their E.164 phone number
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with this phone
    /// * `Err(DomainError)` - Directory unreachable or query failed
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError>;
}
