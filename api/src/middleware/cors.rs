//! CORS configuration

use actix_cors::Cors;
use actix_web::http::header;

/// Create the CORS middleware for the storefront origin
///
/// The allowed origin can be overridden with `CORS_ALLOWED_ORIGIN`.
pub fn create_cors() -> Cors {
    let origin = std::env::var("CORS_ALLOWED_ORIGIN")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());

    Cors::default()
        .allowed_origin(&origin)
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .supports_credentials()
        .max_age(3600)
}
