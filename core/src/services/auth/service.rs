//! Main authentication service implementation

use std::sync::Arc;

use tracing::Span;
use uuid::Uuid;

use crate::domain::entities::token::{TokenKind, TokenPair};
use crate::domain::entities::user::{User, UserProfile};
use crate::domain::value_objects::{LoginCredentials, LogoutAck};
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::{SessionRepository, UserRepository};
use crate::services::password::PasswordService;
use crate::services::session::SessionService;
use crate::services::token::TokenService;

/// Authentication service for login, refresh, logout and profile lookup
///
/// A user is anonymous until login, holds exactly one live session while
/// authenticated (rotated on each refresh), and is anonymous again after
/// logout.
pub struct AuthService<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    /// User repository for credential and profile lookups
    user_repository: Arc<U>,
    /// Session service for refresh-token bookkeeping
    session_service: Arc<SessionService<S>>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// Password hasher
    password_service: Arc<PasswordService>,
    span: Span,
}

impl<U, S> AuthService<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data
    /// * `session_service` - Service for session persistence
    /// * `token_service` - Service for JWT token management
    /// * `password_service` - Service for password verification
    pub fn new(
        user_repository: Arc<U>,
        session_service: Arc<SessionService<S>>,
        token_service: Arc<TokenService>,
        password_service: Arc<PasswordService>,
    ) -> Self {
        Self {
            user_repository,
            session_service,
            token_service,
            password_service,
            span: tracing::info_span!("auth_service"),
        }
    }

    /// Replace the span events are recorded under
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Authenticate with email and password and start a fresh session
    ///
    /// This method:
    /// 1. Checks the credentials
    /// 2. Sweeps this user's expired sessions
    /// 3. Mints a new token pair
    /// 4. Replaces every existing session of the user with one for the new refresh token
    ///
    /// Unknown email and wrong password fail with the same message.
    pub async fn login(&self, credentials: LoginCredentials) -> DomainResult<TokenPair> {
        let user = self
            .validate_user(&credentials.email, &credentials.password)
            .await?
            .ok_or_else(|| DomainError::unauthorized("Invalid credentials"))?;

        self.session_service.cleanup_expired_sessions(user.id).await?;

        let tokens = self.token_service.generate_token_pair(user.id)?;
        self.session_service.delete_by_user_id(user.id).await?;
        self.session_service
            .create_session(user.id, &tokens.refresh_token)
            .await?;

        tracing::info!(parent: &self.span, user_id = %user.id, "User logged in");
        Ok(tokens)
    }

    /// Return the user if the email exists and the password matches
    pub async fn validate_user(&self, email: &str, password: &str) -> DomainResult<Option<User>> {
        let Some(user) = self.user_repository.find_by_email(email).await? else {
            tracing::debug!(parent: &self.span, "Login attempt for unknown email");
            return Ok(None);
        };

        if self
            .password_service
            .compare(password, &user.password_hash)
            .await?
        {
            Ok(Some(user))
        } else {
            tracing::debug!(parent: &self.span, user_id = %user.id, "Login attempt with wrong password");
            Ok(None)
        }
    }

    /// End the session holding this refresh token
    ///
    /// Fails `Unauthorized` for an empty token or one with no session, so a
    /// second logout with the same token fails.
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<LogoutAck> {
        if refresh_token.is_empty() {
            return Err(DomainError::unauthorized("Refresh token not found"));
        }

        let session = self.session_service.validate_session(refresh_token).await?;
        self.session_service.delete_by_token(refresh_token).await?;

        tracing::info!(parent: &self.span, user_id = %session.user_id, "User logged out");
        Ok(LogoutAck::default())
    }

    /// Exchange a refresh token for a new token pair, rotating the session
    ///
    /// Expected failures (`BadRequest`, `Unauthorized`) are returned as-is.
    /// Anything else is logged and replaced by a generic internal error.
    pub async fn refresh_token(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        match self.rotate(refresh_token).await {
            Ok(tokens) => Ok(tokens),
            Err(error) => match error {
                DomainError::BadRequest { .. } | DomainError::Unauthorized { .. } => Err(error),
                DomainError::Internal { message } => {
                    tracing::error!(parent: &self.span, error = %message, "Token refresh failed");
                    Err(DomainError::internal("An unexpected error occurred"))
                }
            },
        }
    }

    async fn rotate(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        if refresh_token.is_empty() {
            return Err(DomainError::bad_request("Refresh token is required"));
        }

        // The session row must exist before the signature is even looked at
        self.session_service.validate_session(refresh_token).await?;

        let claims = self
            .token_service
            .verify_token(refresh_token, TokenKind::Refresh)
            .map_err(|error| match error {
                TokenError::Expired => DomainError::unauthorized("Refresh token has expired"),
                TokenError::InvalidSignature => DomainError::unauthorized("Invalid refresh token"),
                TokenError::Other(reason) => {
                    tracing::warn!(parent: &self.span, %reason, "Unclassified refresh token failure");
                    DomainError::internal("Token verification failed")
                }
            })?;

        let user = match claims.user_id() {
            Ok(user_id) => self.user_repository.find_by_id(user_id).await?,
            Err(_) => None,
        }
        .ok_or_else(|| DomainError::unauthorized("User not found"))?;

        let tokens = self.token_service.generate_token_pair(user.id)?;
        self.session_service.delete_by_user_id(user.id).await?;
        self.session_service
            .create_session(user.id, &tokens.refresh_token)
            .await?;

        tracing::info!(parent: &self.span, user_id = %user.id, "Refresh token rotated");
        Ok(tokens)
    }

    /// Profile of an authenticated user
    pub async fn get_user_info(&self, user_id: Uuid) -> DomainResult<UserProfile> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::bad_request("User not found"))
    }
}
