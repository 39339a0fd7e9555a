//! Route configuration and service-level handlers

use actix_web::{web, HttpResponse};

use sp_core::repositories::UserRepository;
use sp_core::services::otp::{EmailService, KeyValueStore};
use sp_core::services::registration::PasswordHasher;

use crate::routes;

/// Register the application routes
///
/// Expects the matching `AppState<U, S, E, H>` to be attached with
/// `App::app_data` by the caller.
pub fn configure<U, S, E, H>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    S: KeyValueStore + 'static,
    E: EmailService + 'static,
    H: PasswordHasher + 'static,
{
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/api/v1").service(
            web::scope("/auth")
                .route("/register", web::post().to(routes::auth::register::<U, S, E, H>))
                .route("/verify", web::post().to(routes::auth::verify::<U, S, E, H>)),
        ),
    );
}

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "shoply-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "NOT_FOUND",
        "message": "The requested resource was not found",
    }))
}
