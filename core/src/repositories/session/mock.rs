//! Mock implementation of SessionRepository for testing

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::session::{NewSession, Session};
use crate::errors::DomainError;

use super::r#trait::SessionRepository;

/// Operations of the mock that can be made to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionRepositoryOp {
    Create,
    FindByToken,
    FindByUserId,
    DeleteByToken,
    DeleteByUserId,
    DeleteExpired,
}

/// In-memory session repository for testing, keyed by session id
#[derive(Clone, Default)]
pub struct MockSessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    failing: Arc<RwLock<HashSet<SessionRepositoryOp>>>,
}

impl MockSessionRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call of `op` return an internal error
    pub async fn fail_on(&self, op: SessionRepositoryOp) {
        self.failing.write().await.insert(op);
    }

    /// Insert a session row as-is, keeping its timestamps
    pub async fn insert(&self, session: Session) {
        self.sessions.write().await.insert(session.id, session);
    }

    /// Snapshot of every stored session
    pub async fn all(&self) -> Vec<Session> {
        self.sessions.read().await.values().cloned().collect()
    }

    /// Number of stored sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    async fn check(&self, op: SessionRepositoryOp) -> Result<(), DomainError> {
        if self.failing.read().await.contains(&op) {
            return Err(DomainError::internal(format!(
                "Simulated session store failure in {:?}",
                op
            )));
        }
        Ok(())
    }

    async fn remove_where<F>(&self, predicate: F) -> u64
    where
        F: Fn(&Session) -> bool,
    {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !predicate(s));
        (before - sessions.len()) as u64
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn create(&self, session: NewSession) -> Result<Session, DomainError> {
        self.check(SessionRepositoryOp::Create).await?;
        let session = Session::new(session);
        self.sessions.write().await.insert(session.id, session.clone());
        Ok(session)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, DomainError> {
        self.check(SessionRepositoryOp::FindByToken).await?;
        let sessions = self.sessions.read().await;
        Ok(sessions.values().find(|s| s.token == token).cloned())
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Session>, DomainError> {
        self.check(SessionRepositoryOp::FindByUserId).await?;
        let sessions = self.sessions.read().await;
        Ok(sessions
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete_by_token(&self, token: &str) -> Result<u64, DomainError> {
        self.check(SessionRepositoryOp::DeleteByToken).await?;
        Ok(self.remove_where(|s| s.token == token).await)
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<u64, DomainError> {
        self.check(SessionRepositoryOp::DeleteByUserId).await?;
        Ok(self.remove_where(|s| s.user_id == user_id).await)
    }

    async fn delete_expired_sessions(
        &self,
        user_id: Uuid,
        max_age: Duration,
    ) -> Result<u64, DomainError> {
        self.check(SessionRepositoryOp::DeleteExpired).await?;
        let now = Utc::now();
        Ok(self
            .remove_where(|s| s.user_id == user_id && s.is_older_than(max_age, now))
            .await)
    }
}
