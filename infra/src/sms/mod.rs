//! SMS verification provider module
//!
//! Twilio Verify owns the whole OTP lifecycle: it generates the code, sends
//! it by SMS and checks it. This service only relays the phone number and the
//! user-supplied code.

pub mod twilio_verify;

pub use twilio_verify::{TwilioVerifyConfig, TwilioVerifyProvider};
