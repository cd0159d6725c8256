//! Domain entities representing core business objects.

pub mod session;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use session::{NewSession, Session};
pub use token::{
    Claims, TokenKind, TokenPair,
    ACCESS_TOKEN_EXPIRY_SECONDS, REFRESH_TOKEN_EXPIRY_DAYS,
};
pub use user::{NewUser, User, UserProfile};
