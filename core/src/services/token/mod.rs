//! Token service module for JWT management
//!
//! This module handles all token-related operations:
//! - HS256 access and refresh token generation
//! - Verification against the secret of the expected token kind
//! - Classification of verification failures into [`TokenError`](crate::errors::TokenError)

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
