//! Domain-specific error types and error handling.
//!
//! Every fallible operation in the core returns [`DomainError`], a closed set
//! of three kinds. `BadRequest` and `Unauthorized` are expected outcomes and
//! travel unchanged to the HTTP boundary; `Internal` covers everything else
//! and is rendered with a generic message.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Caller supplied invalid or missing input
    #[error("{message}")]
    BadRequest { message: String },

    /// Credential, session or token validity failure
    #[error("{message}")]
    Unauthorized { message: String },

    /// Anything unexpected (store failure, unclassified verification failure)
    #[error("{message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized { message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }
}

/// Token verification failures, classified where the signature is checked
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Malformed token or invalid signature")]
    InvalidSignature,

    #[error("Token verification failed: {0}")]
    Other(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
