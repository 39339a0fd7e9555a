//! # Shoply Core
//!
//! Core business logic and domain layer for the Shoply backend.
//! This crate contains domain entities, the registration and OTP services,
//! repository interfaces, and error types that form the foundation of the
//! application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::user::{User, UserRole};
pub use errors::{AuthError, DomainError, DomainResult, ValidationError};
pub use repositories::UserRepository;
pub use services::otp::{EmailService, KeyValueStore, OtpGuard, OtpService, SendOtpResult};
pub use services::registration::{
    PasswordHasher, RegistrationData, RegistrationService, VerificationData,
};
