//! Session management on top of the session repository
//!
//! A session is one stored refresh token. This module owns the fixed
//! expiry window used by the opportunistic sweep at login.

mod service;

#[cfg(test)]
mod tests;

pub use service::{SessionService, SESSION_EXPIRATION_SECONDS};
