//! Password hashing with bcrypt
//!
//! Hashing is CPU-bound, so both operations run on the blocking thread pool.

use tracing::Span;

use crate::errors::{DomainError, DomainResult};

/// Bcrypt password hasher
#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
    span: Span,
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService {
    /// Hasher with the production cost factor (12)
    pub fn new() -> Self {
        Self::with_cost(bcrypt::DEFAULT_COST)
    }

    /// Hasher with an explicit cost factor
    pub fn with_cost(cost: u32) -> Self {
        Self {
            cost,
            span: tracing::info_span!("password_service"),
        }
    }

    /// Replace the span events are recorded under
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Hash a plaintext password
    pub async fn hash(&self, plaintext: &str) -> DomainResult<String> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    /// Check a plaintext password against a stored hash
    ///
    /// A stored hash bcrypt cannot parse counts as a mismatch.
    pub async fn compare(&self, plaintext: &str, hashed: &str) -> DomainResult<bool> {
        let plaintext = plaintext.to_owned();
        let hashed = hashed.to_owned();

        let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hashed))
            .await
            .map_err(|e| DomainError::internal(format!("Password verification task failed: {}", e)))?;

        match outcome {
            Ok(matched) => Ok(matched),
            Err(e) => {
                tracing::warn!(parent: &self.span, error = %e, "Stored password hash is malformed");
                Ok(false)
            }
        }
    }
}
