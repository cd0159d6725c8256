//! Registration service implementation

use std::sync::Arc;

use tracing::Span;

use crate::domain::entities::session::NewSession;
use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::NewUser;
use crate::domain::value_objects::Registration;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{SessionRepository, UserRepository};
use crate::services::password::PasswordService;
use crate::services::token::TokenService;

/// Creates accounts and signs the new user in
///
/// The first session is written straight to the session repository. A new
/// user has no sessions, so nothing is cleared first.
pub struct RegistrationService<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repository: Arc<U>,
    session_repository: Arc<S>,
    token_service: Arc<TokenService>,
    password_service: Arc<PasswordService>,
    span: Span,
}

impl<U, S> RegistrationService<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(
        user_repository: Arc<U>,
        session_repository: Arc<S>,
        token_service: Arc<TokenService>,
        password_service: Arc<PasswordService>,
    ) -> Self {
        Self {
            user_repository,
            session_repository,
            token_service,
            password_service,
            span: tracing::info_span!("registration_service"),
        }
    }

    /// Replace the span events are recorded under
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Register a new user and return their first token pair
    ///
    /// # Errors
    ///
    /// * `BadRequest("User already exists.")` - the email is taken
    /// * `Internal("Error creating user. Please try again later.")` - any
    ///   later step failed; the cause is logged
    pub async fn register(&self, registration: Registration) -> DomainResult<TokenPair> {
        tracing::info!(parent: &self.span, email = %registration.email, "Registering new user");

        self.ensure_user_does_not_exist(&registration.email).await?;

        match self.create_account(registration).await {
            Ok(tokens) => Ok(tokens),
            Err(error) => {
                tracing::error!(parent: &self.span, %error, "Error creating user");
                Err(DomainError::internal(
                    "Error creating user. Please try again later.",
                ))
            }
        }
    }

    async fn ensure_user_does_not_exist(&self, email: &str) -> DomainResult<()> {
        if self.user_repository.find_by_email(email).await?.is_some() {
            tracing::warn!(parent: &self.span, %email, "User already exists");
            return Err(DomainError::bad_request("User already exists."));
        }
        Ok(())
    }

    async fn create_account(&self, registration: Registration) -> DomainResult<TokenPair> {
        let password_hash = self.password_service.hash(&registration.password).await?;

        let user = self
            .user_repository
            .create(NewUser {
                name: registration.name,
                email: registration.email,
                password_hash,
            })
            .await?;

        let tokens = self.token_service.generate_token_pair(user.id)?;

        self.session_repository
            .create(NewSession {
                user_id: user.id,
                token: tokens.refresh_token.clone(),
            })
            .await?;

        tracing::info!(parent: &self.span, user_id = %user.id, "User created");
        Ok(tokens)
    }
}
