//! Verification provider module
//!
//! The provider is the sole authority on whether an OTP is correct: this
//! service never generates, stores or compares codes itself. Production
//! deployments use Twilio Verify (see the infra crate). The development
//! provider backs local servers and the mock provider backs tests.

pub mod dev;
pub mod mock;
mod traits;

#[cfg(test)]
mod tests;

pub use dev::DevVerificationProvider;
pub use mock::MockVerificationProvider;
pub use traits::VerificationProvider;
