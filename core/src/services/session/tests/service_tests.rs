//! Unit tests for session service

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::session::{NewSession, Session};
use crate::errors::DomainError;
use crate::repositories::session::SessionRepositoryOp;
use crate::repositories::MockSessionRepository;
use crate::services::session::{SessionService, SESSION_EXPIRATION_SECONDS};

fn create_test_service() -> (SessionService<MockSessionRepository>, Arc<MockSessionRepository>) {
    let repository = Arc::new(MockSessionRepository::new());
    (SessionService::new(repository.clone()), repository)
}

fn aged_session(user_id: Uuid, token: &str, age: Duration) -> Session {
    let mut session = Session::new(NewSession {
        user_id,
        token: token.to_string(),
    });
    session.updated_at = Utc::now() - age;
    session
}

#[tokio::test]
async fn test_create_then_validate() {
    let (service, _) = create_test_service();
    let user_id = Uuid::new_v4();

    let created = service.create_session(user_id, "rt-1").await.unwrap();
    let found = service.validate_session("rt-1").await.unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.user_id, user_id);
}

#[tokio::test]
async fn test_validate_unknown_token() {
    let (service, _) = create_test_service();

    let result = service.validate_session("missing").await;

    assert_eq!(
        result,
        Err(DomainError::unauthorized("Invalid session or already logged out"))
    );
}

#[tokio::test]
async fn test_deletes_are_idempotent() {
    let (service, repository) = create_test_service();
    let user_id = Uuid::new_v4();
    service.create_session(user_id, "rt-1").await.unwrap();
    service.create_session(user_id, "rt-2").await.unwrap();

    service.delete_by_token("rt-1").await.unwrap();
    service.delete_by_token("rt-1").await.unwrap();
    assert_eq!(repository.len().await, 1);

    service.delete_by_user_id(user_id).await.unwrap();
    service.delete_by_user_id(user_id).await.unwrap();
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn test_cleanup_removes_only_old_sessions_of_user() {
    let (service, repository) = create_test_service();
    let user_id = Uuid::new_v4();
    let other = Uuid::new_v4();
    let window = Duration::seconds(SESSION_EXPIRATION_SECONDS);

    repository
        .insert(aged_session(user_id, "old", window + Duration::minutes(5)))
        .await;
    repository
        .insert(aged_session(user_id, "recent", Duration::minutes(5)))
        .await;
    repository
        .insert(aged_session(other, "other-old", window + Duration::minutes(5)))
        .await;

    let removed = service.cleanup_expired_sessions(user_id).await.unwrap();

    assert_eq!(removed, 1);
    let remaining = service.list_sessions(user_id).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].token, "recent");
    assert_eq!(service.list_sessions(other).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_store_errors_propagate() {
    let (service, repository) = create_test_service();
    repository.fail_on(SessionRepositoryOp::Create).await;

    let result = service.create_session(Uuid::new_v4(), "rt-1").await;

    assert!(matches!(result, Err(DomainError::Internal { .. })));
}
