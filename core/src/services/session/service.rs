//! Session service implementation

use std::sync::Arc;

use chrono::Duration;
use tracing::Span;
use uuid::Uuid;

use crate::domain::entities::session::{NewSession, Session};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::SessionRepository;

/// Sessions not updated within this window are swept at login (1 hour)
pub const SESSION_EXPIRATION_SECONDS: i64 = 60 * 60;

/// Service for creating, validating and removing refresh-token sessions
pub struct SessionService<S: SessionRepository> {
    repository: Arc<S>,
    span: Span,
}

impl<S: SessionRepository> SessionService<S> {
    /// Create a new session service
    pub fn new(repository: Arc<S>) -> Self {
        Self {
            repository,
            span: tracing::info_span!("session_service"),
        }
    }

    /// Replace the span events are recorded under
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Persist a session for a freshly minted refresh token
    pub async fn create_session(&self, user_id: Uuid, refresh_token: &str) -> DomainResult<Session> {
        let session = self
            .repository
            .create(NewSession {
                user_id,
                token: refresh_token.to_string(),
            })
            .await?;

        tracing::debug!(parent: &self.span, %user_id, session_id = %session.id, "Session created");
        Ok(session)
    }

    /// Look up the session holding this refresh token
    ///
    /// Only checks the store. Signature and expiry are the token service's job.
    ///
    /// # Errors
    ///
    /// `DomainError::Unauthorized` when no session holds the token
    pub async fn validate_session(&self, refresh_token: &str) -> DomainResult<Session> {
        match self.repository.find_by_token(refresh_token).await? {
            Some(session) => Ok(session),
            None => {
                tracing::debug!(parent: &self.span, "No session for presented refresh token");
                Err(DomainError::unauthorized(
                    "Invalid session or already logged out",
                ))
            }
        }
    }

    /// Delete the session holding this refresh token; no-op if absent
    pub async fn delete_by_token(&self, refresh_token: &str) -> DomainResult<()> {
        let removed = self.repository.delete_by_token(refresh_token).await?;
        tracing::debug!(parent: &self.span, removed, "Deleted session by token");
        Ok(())
    }

    /// Delete every session of a user; no-op if there are none
    pub async fn delete_by_user_id(&self, user_id: Uuid) -> DomainResult<()> {
        let removed = self.repository.delete_by_user_id(user_id).await?;
        tracing::debug!(parent: &self.span, %user_id, removed, "Deleted sessions of user");
        Ok(())
    }

    /// Delete this user's sessions that have not been updated within the expiry window
    pub async fn cleanup_expired_sessions(&self, user_id: Uuid) -> DomainResult<u64> {
        let removed = self
            .repository
            .delete_expired_sessions(user_id, Duration::seconds(SESSION_EXPIRATION_SECONDS))
            .await?;

        if removed > 0 {
            tracing::info!(parent: &self.span, %user_id, removed, "Swept expired sessions");
        }
        Ok(removed)
    }

    /// All sessions currently stored for a user
    pub async fn list_sessions(&self, user_id: Uuid) -> DomainResult<Vec<Session>> {
        self.repository.find_by_user_id(user_id).await
    }
}
