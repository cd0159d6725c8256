//! Unit tests for registration service

use std::sync::Arc;

use crate::domain::entities::token::TokenKind;
use crate::domain::value_objects::Registration;
use crate::errors::DomainError;
use crate::repositories::session::SessionRepositoryOp;
use crate::repositories::user::UserRepositoryOp;
use crate::repositories::{MockSessionRepository, MockUserRepository, SessionRepository, UserRepository};
use crate::services::password::PasswordService;
use crate::services::registration::RegistrationService;
use crate::services::token::{TokenService, TokenServiceConfig};

struct Fixture {
    service: RegistrationService<MockUserRepository, MockSessionRepository>,
    users: Arc<MockUserRepository>,
    sessions: Arc<MockSessionRepository>,
    tokens: Arc<TokenService>,
    passwords: Arc<PasswordService>,
}

fn fixture() -> Fixture {
    let users = Arc::new(MockUserRepository::new());
    let sessions = Arc::new(MockSessionRepository::new());
    let tokens = Arc::new(
        TokenService::new(TokenServiceConfig::new("test-access-secret", "test-refresh-secret"))
            .unwrap(),
    );
    let passwords = Arc::new(PasswordService::with_cost(4));

    Fixture {
        service: RegistrationService::new(
            users.clone(),
            sessions.clone(),
            tokens.clone(),
            passwords.clone(),
        ),
        users,
        sessions,
        tokens,
        passwords,
    }
}

fn amr() -> Registration {
    Registration::new("Amr", "a@x.com", "Password123!")
}

#[tokio::test]
async fn test_register_returns_tokens_and_session() {
    let f = fixture();

    let tokens = f.service.register(amr()).await.unwrap();

    let user = f.users.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(user.name, "Amr");
    assert!(f.passwords.compare("Password123!", &user.password_hash).await.unwrap());

    let claims = f.tokens.verify_token(&tokens.access_token, TokenKind::Access).unwrap();
    assert_eq!(claims.user_id().unwrap(), user.id);
    let claims = f.tokens.verify_token(&tokens.refresh_token, TokenKind::Refresh).unwrap();
    assert_eq!(claims.user_id().unwrap(), user.id);

    let sessions = f.sessions.find_by_user_id(user.id).await.unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].token, tokens.refresh_token);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let f = fixture();
    f.service.register(amr()).await.unwrap();

    let result = f.service.register(amr()).await;

    assert_eq!(result, Err(DomainError::bad_request("User already exists.")));
    assert_eq!(f.users.len().await, 1);
}

#[tokio::test]
async fn test_register_wraps_user_store_failure() {
    let f = fixture();
    f.users.fail_on(UserRepositoryOp::Create).await;

    let result = f.service.register(amr()).await;

    assert_eq!(
        result,
        Err(DomainError::internal("Error creating user. Please try again later."))
    );
}

#[tokio::test]
async fn test_register_wraps_session_store_failure() {
    let f = fixture();
    f.sessions.fail_on(SessionRepositoryOp::Create).await;

    let result = f.service.register(amr()).await;

    assert_eq!(
        result,
        Err(DomainError::internal("Error creating user. Please try again later."))
    );
    // The user row was written before the session failed
    assert_eq!(f.users.len().await, 1);
}

#[tokio::test]
async fn test_register_existence_check_failure_is_not_wrapped() {
    let f = fixture();
    f.users.fail_on(UserRepositoryOp::FindByEmail).await;

    let result = f.service.register(amr()).await;

    match result {
        Err(DomainError::Internal { message }) => {
            assert_ne!(message, "Error creating user. Please try again later.");
        }
        other => panic!("expected internal error, got {:?}", other),
    }
}
