//! Domain entities representing core business objects.

pub mod token;
pub mod user;

pub use token::{
    Claims, DEFAULT_TOKEN_EXPIRY_SECONDS, JWT_AUDIENCE, JWT_ISSUER, MAX_TOKEN_EXPIRY_SECONDS,
};
pub use user::User;
