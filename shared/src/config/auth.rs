//! Authentication configuration: token secrets and the refresh cookie

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// JWT signing configuration
///
/// Access and refresh tokens are signed with two independent secrets so a
/// token of one kind never verifies as the other.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret for access tokens (`JWT_SECRET`)
    pub access_secret: String,

    /// Secret for refresh tokens (`RT_SECRET`)
    pub refresh_secret: String,
}

impl JwtConfig {
    /// Create a new JWT configuration. Token lifetimes are fixed by the token service.
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
        }
    }

    /// Check that both secrets are set and distinct
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.access_secret.is_empty() {
            return Err(ConfigError::Missing("JWT_SECRET"));
        }
        if self.refresh_secret.is_empty() {
            return Err(ConfigError::Missing("RT_SECRET"));
        }
        if self.access_secret == self.refresh_secret {
            return Err(ConfigError::Invalid {
                key: "RT_SECRET",
                reason: "must differ from JWT_SECRET".to_string(),
            });
        }
        Ok(())
    }
}

/// Refresh token cookie settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CookieConfig {
    /// Cookie name
    pub name: String,

    /// Cookie path
    pub path: String,

    /// Max age in seconds
    pub max_age: i64,

    /// Secure flag (HTTPS only)
    pub secure: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: String::from("refresh_token"),
            path: String::from("/"),
            max_age: 7 * 24 * 60 * 60,
            secure: false,
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Refresh cookie configuration
    #[serde(default)]
    pub cookie: CookieConfig,
}

impl AuthConfig {
    /// Create from an environment lookup. Both secrets are required.
    pub fn from_vars<F>(var: F, secure_cookie: bool) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_secret = var("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        let refresh_secret = var("RT_SECRET").ok_or(ConfigError::Missing("RT_SECRET"))?;

        let jwt = JwtConfig::new(access_secret, refresh_secret);
        jwt.validate()?;

        Ok(Self {
            jwt,
            cookie: CookieConfig {
                secure: secure_cookie,
                ..Default::default()
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_accepts_distinct_secrets() {
        let config = JwtConfig::new("access", "refresh");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_jwt_config_rejects_shared_secret() {
        let config = JwtConfig::new("same", "same");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { key: "RT_SECRET", .. })
        ));
    }

    #[test]
    fn test_cookie_config_default() {
        let config = CookieConfig::default();
        assert_eq!(config.name, "refresh_token");
        assert_eq!(config.path, "/");
        assert_eq!(config.max_age, 604800);
        assert!(!config.secure);
    }
}
