pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod memory;
pub mod mock;

pub use memory::InMemoryUserRepository;
pub use mock::MockUserRepository;
pub use r#trait::UserRepository;

#[cfg(test)]
mod tests;
