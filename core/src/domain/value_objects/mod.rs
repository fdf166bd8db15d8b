//! Value objects exchanged between the services and the API layer.

pub mod auth_token;
pub mod verification;

pub use auth_token::AuthToken;
pub use verification::{VerificationCheck, VerificationStatus};
