//! Handler for `POST /api/v1/auth/register`

use actix_web::{web, HttpResponse};
use validator::Validate;

use sp_core::repositories::UserRepository;
use sp_core::services::otp::{EmailService, KeyValueStore};
use sp_core::services::registration::PasswordHasher;
use sp_shared::utils::validation::mask_email;
use sp_shared::ApiResponse;

use crate::dto::auth::{RegisterRequest, RegisterResponse};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::state::AppState;

/// Validate the payload and send a verification code by email
///
/// # Responses
/// * `200` - OTP sent
/// * `400` - malformed payload
/// * `409` - email already registered
/// * `429` - cooldown, spam lock or account lock active (`Retry-After` set)
/// * `502` - email delivery failed
pub async fn register<U, S, E, H>(
    state: web::Data<AppState<U, S, E, H>>,
    payload: web::Json<RegisterRequest>,
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
    let data = payload.into_inner().into_registration_data();

    tracing::info!(
        email = %mask_email(&email),
        role = ?role,
        "processing registration request"
    );

    match state.registration.register(data, role).await {
        Ok(result) => HttpResponse::Ok().json(ApiResponse::success(RegisterResponse {
            message: "OTP sent to your email. Please verify your account!".to_string(),
            next_resend_at: result.next_resend_at,
        })),
        Err(err) => domain_error_response(&err),
    }
}
