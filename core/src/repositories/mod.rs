pub mod session;
pub mod user;

pub use session::SessionRepository;
pub use user::UserRepository;

#[cfg(any(test, feature = "mock"))]
pub use session::MockSessionRepository;
#[cfg(any(test, feature = "mock"))]
pub use user::MockUserRepository;
