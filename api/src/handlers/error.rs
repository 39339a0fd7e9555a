//! Mapping of domain errors onto HTTP responses
//!
//! The core surfaces errors with their user-facing messages; this module
//! owns the transport envelope: status codes, Retry-After hints and the
//! JSON body shape.

use std::collections::HashMap;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::ValidationErrors;

use sp_core::errors::{AuthError, DomainError};

/// JSON error envelope
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Stable error code for programmatic handling
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Field-level validation details, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<HashMap<String, Vec<String>>>,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorBody {
    fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            fields: None,
            timestamp: Utc::now(),
        }
    }
}

/// Status code for a domain error
fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Auth(auth) => match auth {
            AuthError::OtpExpiredOrInvalid | AuthError::OtpMismatch { .. } => {
                StatusCode::BAD_REQUEST
            }
            AuthError::UserAlreadyExists => StatusCode::CONFLICT,
            AuthError::AccountLocked | AuthError::OtpSpamLimit | AuthError::OtpCooldown => {
                StatusCode::TOO_MANY_REQUESTS
            }
            AuthError::EmailDeliveryFailure { .. } => StatusCode::BAD_GATEWAY,
        },
        DomainError::Store { .. } | DomainError::Database { .. } | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Build the HTTP response for a domain error
///
/// Restriction errors (lock, spam lock, cooldown) carry a `Retry-After`
/// header; backend failures are reported without internal detail.
pub fn domain_error_response(err: &DomainError) -> HttpResponse {
    let status = status_for(err);

    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "request failed with internal error");
        "Internal server error".to_string()
    } else {
        err.to_string()
    };

    let mut response = HttpResponse::build(status);
    if let Some(seconds) = err.retry_after_seconds() {
        response.insert_header(("Retry-After", seconds.to_string()));
    }

    response.json(ErrorBody::new(err.error_code(), message))
}

/// Build the HTTP response for request payload validation failures
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut fields: HashMap<String, Vec<String>> = HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        fields.insert(field.to_string(), messages);
    }

    let mut body = ErrorBody::new("VALIDATION_ERROR", "Invalid request data");
    body.fields = Some(fields);

    HttpResponse::BadRequest().json(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp_core::errors::ValidationError;

    #[test]
    fn test_restrictions_map_to_429() {
        for auth in [
            AuthError::AccountLocked,
            AuthError::OtpSpamLimit,
            AuthError::OtpCooldown,
        ] {
            let err: DomainError = auth.into();
            assert_eq!(status_for(&err), StatusCode::TOO_MANY_REQUESTS);
        }
    }

    #[test]
    fn test_mismatch_and_expired_map_to_400() {
        let err: DomainError = AuthError::OtpMismatch { remaining: 1 }.into();
        assert_eq!(status_for(&err), StatusCode::BAD_REQUEST);

        let err: DomainError = AuthError::OtpExpiredOrInvalid.into();
        assert_eq!(status_for(&err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_duplicate_user_maps_to_409() {
        let err: DomainError = AuthError::UserAlreadyExists.into();
        assert_eq!(status_for(&err), StatusCode::CONFLICT);
    }

    #[test]
    fn test_delivery_failure_maps_to_502() {
        let err: DomainError = AuthError::EmailDeliveryFailure {
            reason: "relay down".to_string(),
        }
        .into();
        assert_eq!(status_for(&err), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_backend_errors_map_to_500() {
        let err = DomainError::Store {
            message: "connection refused".to_string(),
        };
        assert_eq!(status_for(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err: DomainError = ValidationError::MissingRequiredFields.into();
        assert_eq!(status_for(&err), StatusCode::BAD_REQUEST);
    }
}
