//! Token service module for JWT management
//!
//! Auth tokens are HS256-signed JWTs bound to the user's directory id. They
//! are created fresh for every successful verification and never stored.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::{JwtTokenIssuer, TokenIssuer};
