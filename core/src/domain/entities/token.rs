//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token lifetime (1 hour)
pub const ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 60 * 60;

/// Refresh token lifetime (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Which of the two signing secrets a token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    /// Default lifetime of a token of this kind
    pub fn default_lifetime(self) -> Duration {
        match self {
            TokenKind::Access => Duration::seconds(ACCESS_TOKEN_EXPIRY_SECONDS),
            TokenKind::Refresh => Duration::days(REFRESH_TOKEN_EXPIRY_DAYS),
        }
    }
}

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub id: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// JWT ID, distinguishes tokens minted for the same user in the same second
    pub jti: String,
}

impl Claims {
    /// Creates claims for a token issued now
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `lifetime` - Time until the token expires
    pub fn new(user_id: Uuid, lifetime: Duration) -> Self {
        let now = Utc::now();
        let expiry = now + lifetime;

        Self {
            id: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Gets the user ID from the claims
    ///
    /// # Returns
    ///
    /// `Ok(Uuid)` if the id can be parsed as a UUID, `Err` otherwise
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.id)
    }
}

/// Access/refresh token pair produced on login, registration and refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, TokenKind::Access.default_lifetime());

        assert_eq!(claims.id, user_id.to_string());
        assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_EXPIRY_SECONDS);
    }

    #[test]
    fn test_refresh_token_claims() {
        let claims = Claims::new(Uuid::new_v4(), TokenKind::Refresh.default_lifetime());

        assert_eq!(claims.exp - claims.iat, REFRESH_TOKEN_EXPIRY_DAYS * 24 * 60 * 60);
    }

    #[test]
    fn test_claims_user_id_parsing() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, TokenKind::Access.default_lifetime());
        assert_eq!(claims.user_id().unwrap(), user_id);

        let mut bad = claims.clone();
        bad.id = "not-a-uuid".to_string();
        assert!(bad.user_id().is_err());
    }

    #[test]
    fn test_claims_have_unique_jti() {
        let user_id = Uuid::new_v4();
        let a = Claims::new(user_id, TokenKind::Refresh.default_lifetime());
        let b = Claims::new(user_id, TokenKind::Refresh.default_lifetime());
        assert_ne!(a.jti, b.jti);
    }
}
