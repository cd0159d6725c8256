//! Inputs and acknowledgements exchanged with the authentication services.

use serde::{Deserialize, Serialize};

/// Email and plaintext password submitted at login
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Registration form: display name, email and plaintext password
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Acknowledgement returned after a successful logout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutAck {
    pub message: String,
}

impl LogoutAck {
    pub const MESSAGE: &'static str = "Logged out successfully";
}

impl Default for LogoutAck {
    fn default() -> Self {
        Self {
            message: Self::MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logout_ack_serialization() {
        let json = serde_json::to_value(LogoutAck::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Logged out successfully" }));
    }

    #[test]
    fn test_login_credentials_new() {
        let creds = LoginCredentials::new("a@x.com", "secret123");
        assert_eq!(creds.email, "a@x.com");
        assert_eq!(creds.password, "secret123");
    }
}
