//! Business services containing domain logic and use cases.

pub mod otp;
pub mod registration;

// Re-export commonly used types
pub use otp::{EmailService, KeyValueStore, OtpGuard, OtpService, SendOtpResult};
pub use registration::{PasswordHasher, RegistrationService};
