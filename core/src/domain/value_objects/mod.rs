//! Value objects representing immutable domain concepts.

pub mod credentials;

// Re-export commonly used types
pub use credentials::{LoginCredentials, LogoutAck, Registration};
