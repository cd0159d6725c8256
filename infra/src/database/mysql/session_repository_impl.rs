//! MySQL implementation of the SessionRepository trait.
//!
//! Sessions store the raw refresh token string. Both `token` and `user_id`
//! are indexed but not unique.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use cine_core::domain::entities::session::{NewSession, Session};
use cine_core::errors::DomainError;
use cine_core::repositories::SessionRepository;

/// MySQL implementation of SessionRepository
pub struct MySqlSessionRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlSessionRepository {
    /// Create a new MySQL session repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Session entity
    fn row_to_session(row: &sqlx::mysql::MySqlRow) -> Result<Session, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| DomainError::internal(format!("Failed to get user_id: {}", e)))?;

        Ok(Session {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid session UUID: {}", e)))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {}", e)))?,
            token: row
                .try_get("token")
                .map_err(|e| DomainError::internal(format!("Failed to get token: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::internal(format!("Failed to get updated_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl SessionRepository for MySqlSessionRepository {
    async fn create(&self, session: NewSession) -> Result<Session, DomainError> {
        let session = Session::new(session);

        let query = r#"
            INSERT INTO sessions (id, user_id, token, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(session.id.to_string())
            .bind(session.user_id.to_string())
            .bind(&session.token)
            .bind(session.created_at)
            .bind(session.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to create session: {}", e)))?;

        Ok(session)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, DomainError> {
        let query = r#"
            SELECT id, user_id, token, created_at, updated_at
            FROM sessions
            WHERE token = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find session: {}", e)))?;

        result.as_ref().map(Self::row_to_session).transpose()
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Session>, DomainError> {
        let query = r#"
            SELECT id, user_id, token, created_at, updated_at
            FROM sessions
            WHERE user_id = ?
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to list sessions: {}", e)))?;

        rows.iter().map(Self::row_to_session).collect()
    }

    async fn delete_by_token(&self, token: &str) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to delete session: {}", e)))?;

        Ok(result.rows_affected())
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to delete user sessions: {}", e)))?;

        Ok(result.rows_affected())
    }

    async fn delete_expired_sessions(
        &self,
        user_id: Uuid,
        max_age: Duration,
    ) -> Result<u64, DomainError> {
        let cutoff = Utc::now() - max_age;

        let result = sqlx::query("DELETE FROM sessions WHERE user_id = ? AND updated_at < ?")
            .bind(user_id.to_string())
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::internal(format!("Failed to delete expired sessions: {}", e))
            })?;

        Ok(result.rows_affected())
    }
}
