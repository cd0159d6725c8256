//! Shared wiring for the HTTP integration tests

use std::sync::Arc;

use actix_web::web;

use cine_api::routes::auth::AppState;
use cine_core::repositories::{MockSessionRepository, MockUserRepository};
use cine_core::services::{
    AuthService, PasswordService, RegistrationService, SessionService, TokenService,
    TokenServiceConfig,
};
use cine_shared::config::{CookieConfig, CorsConfig};

pub const EMAIL: &str = "a@x.com";
pub const PASSWORD: &str = "Password123!";

pub type TestState = AppState<MockUserRepository, MockSessionRepository>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub users: Arc<MockUserRepository>,
    pub sessions: Arc<MockSessionRepository>,
    pub tokens: Arc<TokenService>,
}

impl TestContext {
    pub fn new() -> Self {
        let users = Arc::new(MockUserRepository::new());
        let sessions = Arc::new(MockSessionRepository::new());
        let tokens = Arc::new(
            TokenService::new(TokenServiceConfig::new("test-jwt-secret", "test-rt-secret"))
                .expect("distinct secrets"),
        );
        let passwords = Arc::new(PasswordService::with_cost(4));
        let session_service = Arc::new(SessionService::new(sessions.clone()));

        let state = web::Data::new(AppState {
            auth_service: Arc::new(AuthService::new(
                users.clone(),
                session_service,
                tokens.clone(),
                passwords.clone(),
            )),
            registration_service: Arc::new(RegistrationService::new(
                users.clone(),
                sessions.clone(),
                tokens.clone(),
                passwords,
            )),
            token_service: tokens.clone(),
            cookie: CookieConfig::default(),
            cors: CorsConfig::default(),
        });

        Self {
            state,
            users,
            sessions,
            tokens,
        }
    }
}

pub fn register_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Amr",
        "email": EMAIL,
        "password": PASSWORD,
    })
}

pub fn login_body(password: &str) -> serde_json::Value {
    serde_json::json!({
        "email": EMAIL,
        "password": password,
    })
}
