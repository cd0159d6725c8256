//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::{NewUser, User, UserProfile};
use crate::errors::DomainError;

use super::r#trait::UserRepository;

/// Operations of the mock that can be made to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRepositoryOp {
    FindByEmail,
    FindById,
    Create,
}

/// In-memory user repository for testing
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    failing: Arc<RwLock<HashSet<UserRepositoryOp>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call of `op` return an internal error
    pub async fn fail_on(&self, op: UserRepositoryOp) {
        self.failing.write().await.insert(op);
    }

    /// Insert a user directly, bypassing `create`
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    async fn check(&self, op: UserRepositoryOp) -> Result<(), DomainError> {
        if self.failing.read().await.contains(&op) {
            return Err(DomainError::internal(format!(
                "Simulated user store failure in {:?}",
                op
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.check(UserRepositoryOp::FindByEmail).await?;
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserProfile>, DomainError> {
        self.check(UserRepositoryOp::FindById).await?;
        let users = self.users.read().await;
        Ok(users.get(&id).map(User::profile))
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        self.check(UserRepositoryOp::Create).await?;
        let mut users = self.users.write().await;

        // Mirrors the unique index on users.email
        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::internal(format!(
                "Failed to create user: duplicate email {}",
                user.email
            )));
        }

        let user = User::new(user);
        users.insert(user.id, user.clone());
        Ok(user)
    }
}
