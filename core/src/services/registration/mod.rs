//! Registration flow orchestration
//!
//! Ties the pieces of the sign-up flow together: request-shape validation,
//! the existing-account check, OTP issuance restrictions, code delivery,
//! verification, password hashing and user creation.

mod service;
mod traits;
mod types;
pub mod validation;

#[cfg(test)]
mod tests;

pub use service::RegistrationService;
pub use traits::PasswordHasher;
pub use types::{RegistrationData, VerificationData};
pub use validation::validate_registration_data;
