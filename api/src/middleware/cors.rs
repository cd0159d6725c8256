//! CORS middleware configuration for cross-origin requests.
//!
//! The browser client lives on a single configured origin and sends the
//! refresh token cookie, so credentials are always allowed and the origin
//! is never a wildcard.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use cine_shared::config::CorsConfig;

/// Creates a CORS middleware instance from the loaded configuration.
///
/// `CorsConfig::allowed_origin` comes from `CORS_ORIGIN` and `max_age` from
/// `CORS_MAX_AGE`.
pub fn create_cors(config: &CorsConfig) -> Cors {
    tracing::info!(origin = %config.allowed_origin, "Configuring CORS");

    Cors::default()
        .allowed_origin(&config.allowed_origin)
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("refresh-token"),
        ])
        .max_age(config.max_age)
        .supports_credentials()
}
