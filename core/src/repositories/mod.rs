pub mod user;

pub use user::{InMemoryUserRepository, MockUserRepository, UserRepository};
