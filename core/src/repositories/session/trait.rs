//! Session repository trait defining the interface for refresh-token session persistence.

use async_trait::async_trait;
use chrono::Duration;
use uuid::Uuid;

use crate::domain::entities::session::{NewSession, Session};
use crate::errors::DomainError;

/// Repository trait for Session entity persistence operations
///
/// One row is stored per issued refresh token. A refresh token is only
/// honoured while its row exists, so deleting rows is how sessions end.
/// All delete operations are idempotent and report the number of rows removed.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Save a new session
    ///
    /// # Arguments
    /// * `session` - The user id and refresh token to persist
    ///
    /// # Returns
    /// * `Ok(Session)` - The stored row with generated id and timestamps
    /// * `Err(DomainError)` - Database error occurred
    async fn create(&self, session: NewSession) -> Result<Session, DomainError>;

    /// Find the session holding exactly this refresh token
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, DomainError>;

    /// List every session of a user
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Session>, DomainError>;

    /// Delete the session holding this refresh token
    async fn delete_by_token(&self, token: &str) -> Result<u64, DomainError>;

    /// Delete every session of a user
    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<u64, DomainError>;

    /// Delete a user's sessions whose `updated_at` is older than `now - max_age`
    ///
    /// # Example
    /// ```no_run
    /// # use uuid::Uuid;
    /// # use chrono::Duration;
    /// # use cine_core::repositories::SessionRepository;
    /// # async fn example(repo: &impl SessionRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let user_id = Uuid::new_v4();
    /// let removed = repo.delete_expired_sessions(user_id, Duration::hours(1)).await?;
    /// println!("Removed {} stale sessions", removed);
    /// # Ok(())
    /// # }
    /// ```
    async fn delete_expired_sessions(
        &self,
        user_id: Uuid,
        max_age: Duration,
    ) -> Result<u64, DomainError>;
}
