//! Handler for `POST /api/v1/auth/verify`

use actix_web::{web, HttpResponse};
use validator::Validate;

use sp_core::repositories::UserRepository;
use sp_core::services::otp::{EmailService, KeyValueStore};
use sp_core::services::registration::PasswordHasher;
use sp_shared::utils::validation::mask_email;
use sp_shared::ApiResponse;

use crate::dto::auth::{VerifyRequest, VerifyResponse};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::state::AppState;

/// Verify the submitted OTP and create the user record
///
/// # Responses
/// * `201` - user created
/// * `400` - malformed payload, wrong or expired code
/// * `409` - email already registered
/// * `429` - account locked (`Retry-After` set)
pub async fn verify<U, S, E, H>(
    state: web::Data<AppState<U, S, E, H>>,
    payload: web::Json<VerifyRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: KeyValueStore + 'static,
    E: EmailService + 'static,
    H: PasswordHasher + 'static,
{
    if let Err(errors) = payload.validate() {
        return validation_error_response(&errors);
    }

    let role = payload.role();
    let email = payload.email.clone();
    let data = payload.into_inner().into_verification_data();

    tracing::info!(
        email = %mask_email(&email),
        role = ?role,
        "processing verification request"
    );

    match state.registration.verify(data, role).await {
        Ok(user) => HttpResponse::Created().json(ApiResponse::success(VerifyResponse {
            message: "User registered successfully".to_string(),
            user_id: user.id,
        })),
        Err(err) => domain_error_response(&err),
    }
}
