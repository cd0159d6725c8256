//! Shared utilities and common types for the Cinedex server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The error response body returned by every endpoint

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, CookieConfig, CorsConfig, DatabaseConfig, Environment,
    JwtConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
