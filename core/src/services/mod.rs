//! Business services containing domain logic and use cases.

pub mod auth;
pub mod password;
pub mod registration;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use auth::AuthService;
pub use password::PasswordService;
pub use registration::RegistrationService;
pub use session::{SessionService, SESSION_EXPIRATION_SECONDS};
pub use token::{TokenService, TokenServiceConfig};
