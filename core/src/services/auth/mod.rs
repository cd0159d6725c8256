//! Authentication service module
//!
//! This module implements the session lifecycle of an existing account:
//! - Login with email and password
//! - Refresh token rotation
//! - Logout
//! - Profile lookup for an authenticated user

mod service;


pub use service::AuthService;
