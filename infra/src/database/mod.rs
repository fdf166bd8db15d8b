//! Database module - MySQL user directory using SQLx
//!
//! This module provides:
//! - Connection pool creation from `DatabaseConfig`
//! - The MySQL implementation of `UserRepository`

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::create_pool;
pub use mysql::MySqlUserRepository;
