//! Authentication route handlers
//!
//! This module contains all authentication-related endpoints:
//! - Registration and login
//! - Refresh token rotation
//! - Logout
//! - Current user profile

pub mod cookie;
pub mod login;
pub mod logout;
pub mod me;
pub mod refresh;
pub mod register;

use std::sync::Arc;

use cine_core::repositories::{SessionRepository, UserRepository};
use cine_core::services::{AuthService, RegistrationService, TokenService};
use cine_shared::config::{CookieConfig, CorsConfig};

pub use login::login;
pub use logout::logout;
pub use me::me;
pub use refresh::refresh;
pub use register::register;

/// Application state that holds shared services
pub struct AppState<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub auth_service: Arc<AuthService<U, S>>,
    pub registration_service: Arc<RegistrationService<U, S>>,
    /// Also registered on its own for the JWT middleware
    pub token_service: Arc<TokenService>,
    pub cookie: CookieConfig,
    pub cors: CorsConfig,
}
