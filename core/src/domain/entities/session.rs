//! Session entity: one persisted row per issued refresh token.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user session bound to one refresh token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for the session
    pub id: Uuid,

    /// User this session belongs to
    pub user_id: Uuid,

    /// The raw refresh token string
    pub token: String,

    /// Timestamp when the session was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the session was last updated
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Creates a new session for a user and refresh token
    pub fn new(new_session: NewSession) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: new_session.user_id,
            token: new_session.token,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the session was last updated more than `max_age` before `now`
    pub fn is_older_than(&self, max_age: Duration, now: DateTime<Utc>) -> bool {
        self.updated_at < now - max_age
    }
}

/// Fields required to create a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    pub user_id: Uuid,
    pub token: String,
}
