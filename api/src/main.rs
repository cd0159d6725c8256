use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use cine_api::app::create_app;
use cine_api::routes::auth::AppState;
use cine_core::services::{
    AuthService, PasswordService, RegistrationService, SessionService, TokenService,
    TokenServiceConfig,
};
use cine_infra::{DatabasePool, MySqlSessionRepository, MySqlUserRepository};
use cine_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (.env is read first when present)
    let config = AppConfig::from_env().context("Invalid configuration")?;

    // Initialize tracing; RUST_LOG wins over the environment default
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.environment.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(environment = %config.environment, "Starting Cinedex API server");

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("Failed to connect to the database")?;
    pool.run_migrations()
        .await
        .context("Failed to apply database migrations")?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let session_repository = Arc::new(MySqlSessionRepository::new(pool.get_pool().clone()));

    let token_config = TokenServiceConfig::new(
        config.auth.jwt.access_secret.clone(),
        config.auth.jwt.refresh_secret.clone(),
    );

    let token_service = Arc::new(TokenService::new(token_config).context("Invalid token secrets")?);
    let password_service = Arc::new(PasswordService::new());
    let session_service = Arc::new(SessionService::new(session_repository.clone()));

    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        session_service,
        token_service.clone(),
        password_service.clone(),
    ));
    let registration_service = Arc::new(RegistrationService::new(
        user_repository,
        session_repository,
        token_service.clone(),
        password_service,
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        registration_service,
        token_service,
        cookie: config.auth.cookie.clone(),
        cors: config.cors.clone(),
    });

    let bind_address = config.server.bind_address();
    tracing::info!(%bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    pool.close().await;
    Ok(())
}
