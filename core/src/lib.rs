//! # Cinedex Core
//!
//! Core business logic and domain layer for the Cinedex backend.
//! This crate contains domain entities, the authentication and session
//! services, repository interfaces, and the error taxonomy shared by
//! every layer above it.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
