//! Application state and factory
//!
//! This module provides the factory for creating the Actix-web application
//! from an already wired [`AppState`].

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use crate::handlers::error::json_error_handler;
use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::auth::{login, logout, me, refresh, register, AppState};

use cine_core::repositories::{SessionRepository, UserRepository};

/// Create and configure the application with all dependencies
pub fn create_app<U, S>(
    app_state: web::Data<AppState<U, S>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
{
    let cors = create_cors(&app_state.cors);
    let token_service = web::Data::new(app_state.token_service.clone());

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(token_service)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))

        // Outermost last: tracing wraps CORS
        .wrap(cors)
        .wrap(TracingLogger::default())

        // Health check endpoint
        .route("/health", web::get().to(health_check))

        .service(
            web::scope("/auth")
                .route("/register", web::post().to(register::<U, S>))
                .route("/login", web::post().to(login::<U, S>))
                .route("/refresh", web::post().to(refresh::<U, S>))
                .route("/logout", web::post().to(logout::<U, S>))
                .route("/me", web::post().to(me::<U, S>).wrap(JwtAuth::new())),
        )

        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "cinedex-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
