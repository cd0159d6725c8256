//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and returns `DomainError::Internal` for storage
//! failures. Implementations live in the infrastructure crate.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::{NewUser, User, UserProfile};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use cine_core::repositories::UserRepository;
/// use cine_core::domain::entities::user::{NewUser, User, UserProfile};
/// use cine_core::errors::DomainError;
///
/// struct MySqlUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for MySqlUserRepository {
///     async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     async fn find_by_id(&self, id: Uuid) -> Result<Option<UserProfile>, DomainError> {
///         Ok(None)
///     }
///
///     async fn create(&self, user: NewUser) -> Result<User, DomainError> {
///         Ok(User::new(user))
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email, including the stored password hash
    ///
    /// Matching is exact: no case folding or trimming is applied.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with this email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by id
    ///
    /// The returned profile never carries the password hash.
    ///
    /// # Example
    /// ```no_run
    /// # use uuid::Uuid;
    /// # use cine_core::repositories::UserRepository;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let user_id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000")?;
    ///
    /// if let Some(profile) = repo.find_by_id(user_id).await? {
    ///     println!("User: {}", profile.email);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserProfile>, DomainError>;

    /// Persist a new user and return it with generated id and timestamps
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;
}
