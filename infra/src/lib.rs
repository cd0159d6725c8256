//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Cinedex backend.
//! It provides the MySQL implementations of the repository traits defined in
//! `cine_core`, together with connection pool management and schema
//! migrations.
//!
//! ## Architecture
//!
//! - **Database**: connection pool ([`database::DatabasePool`]) and MySQL
//!   repositories for users and sessions, using SQLx

// Re-export core types for convenience
pub use cine_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::{DatabasePool, MySqlSessionRepository, MySqlUserRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
