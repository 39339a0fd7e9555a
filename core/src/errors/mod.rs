//! Domain-specific error types for registration and OTP operations.
//!
//! The variants carry the exact user-facing messages; the API layer maps
//! them onto transport-level status codes without rewording.

use thiserror::Error;

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields!")]
    MissingRequiredFields,

    #[error("Invalid email format!")]
    InvalidEmailFormat,
}

/// Authentication and OTP workflow errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Account locked due to multiple failed attempts! Try again after 30 minutes.")]
    AccountLocked,

    #[error("Too many OTP requests! Please wait 1 hour before requesting again.")]
    OtpSpamLimit,

    #[error("Please wait 1 minute before requesting another OTP.")]
    OtpCooldown,

    #[error("Invalid or expired OTP!")]
    OtpExpiredOrInvalid,

    #[error("Incorrect OTP! {remaining} attempts left.")]
    OtpMismatch { remaining: u32 },

    #[error("User already exists with this email!")]
    UserAlreadyExists,

    #[error("Failed to deliver OTP email: {reason}")]
    EmailDeliveryFailure { reason: String },
}

impl AuthError {
    /// Seconds the caller should wait before retrying, for restriction errors
    pub fn retry_after_seconds(&self) -> Option<u64> {
        match self {
            AuthError::AccountLocked => Some(1800),
            AuthError::OtpSpamLimit => Some(3600),
            AuthError::OtpCooldown => Some(60),
            _ => None,
        }
    }
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Key-value backend failure; fatal for the current request
    #[error("Store error: {message}")]
    Store { message: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Stable error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Auth(AuthError::AccountLocked) => "ACCOUNT_LOCKED",
            DomainError::Auth(AuthError::OtpSpamLimit) => "OTP_SPAM_LIMIT",
            DomainError::Auth(AuthError::OtpCooldown) => "OTP_COOLDOWN",
            DomainError::Auth(AuthError::OtpExpiredOrInvalid) => "OTP_EXPIRED_OR_INVALID",
            DomainError::Auth(AuthError::OtpMismatch { .. }) => "OTP_MISMATCH",
            DomainError::Auth(AuthError::UserAlreadyExists) => "USER_ALREADY_EXISTS",
            DomainError::Auth(AuthError::EmailDeliveryFailure { .. }) => "EMAIL_DELIVERY_FAILURE",
            DomainError::Validation(ValidationError::MissingRequiredFields) => "MISSING_FIELDS",
            DomainError::Validation(ValidationError::InvalidEmailFormat) => "INVALID_EMAIL_FORMAT",
            DomainError::Store { .. } => "STORE_ERROR",
            DomainError::Database { .. } => "DATABASE_ERROR",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Seconds the caller should wait before retrying, if applicable
    pub fn retry_after_seconds(&self) -> Option<u64> {
        match self {
            DomainError::Auth(err) => err.retry_after_seconds(),
            _ => None,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_carries_remaining() {
        let err = AuthError::OtpMismatch { remaining: 2 };
        assert_eq!(err.to_string(), "Incorrect OTP! 2 attempts left.");
    }

    #[test]
    fn test_restriction_retry_after() {
        assert_eq!(AuthError::AccountLocked.retry_after_seconds(), Some(1800));
        assert_eq!(AuthError::OtpSpamLimit.retry_after_seconds(), Some(3600));
        assert_eq!(AuthError::OtpCooldown.retry_after_seconds(), Some(60));
        assert_eq!(
            AuthError::OtpMismatch { remaining: 1 }.retry_after_seconds(),
            None
        );
    }

    #[test]
    fn test_error_codes() {
        let err: DomainError = AuthError::UserAlreadyExists.into();
        assert_eq!(err.error_code(), "USER_ALREADY_EXISTS");

        let err: DomainError = ValidationError::InvalidEmailFormat.into();
        assert_eq!(err.error_code(), "INVALID_EMAIL_FORMAT");
    }
}
