//! Main token service implementation

use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::Span;
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenKind, TokenPair};
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Signing and verification keys for one token kind
struct KeyPair {
    encoding: EncodingKey,
    decoding: DecodingKey,
    lifetime: Duration,
}

impl KeyPair {
    fn from_secret(secret: &str, lifetime_seconds: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            lifetime: Duration::seconds(lifetime_seconds),
        }
    }
}

/// Service for minting and verifying access and refresh tokens
///
/// Access and refresh tokens are signed with different secrets, so a token
/// only verifies as the kind it was minted as. The secrets are fixed at
/// construction.
pub struct TokenService {
    access: KeyPair,
    refresh: KeyPair,
    header: Header,
    validation: Validation,
    span: Span,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or `DomainError::Internal` if a secret is empty
    /// or both secrets are the same
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.access_secret.is_empty() || config.refresh_secret.is_empty() {
            return Err(DomainError::internal("Token secrets must not be empty"));
        }
        if config.access_secret == config.refresh_secret {
            return Err(DomainError::internal(
                "Access and refresh token secrets must differ",
            ));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Ok(Self {
            access: KeyPair::from_secret(&config.access_secret, config.access_token_expiry_seconds),
            refresh: KeyPair::from_secret(
                &config.refresh_secret,
                config.refresh_token_expiry_seconds,
            ),
            header: Header::new(Algorithm::HS256),
            validation,
            span: tracing::info_span!("token_service"),
        })
    }

    /// Replace the span events are recorded under
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    fn keys(&self, kind: TokenKind) -> &KeyPair {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }

    /// Mint an access token for a user
    pub fn generate_access_token(&self, user_id: Uuid) -> DomainResult<String> {
        self.generate(user_id, TokenKind::Access)
    }

    /// Mint a refresh token for a user
    pub fn generate_refresh_token(&self, user_id: Uuid) -> DomainResult<String> {
        self.generate(user_id, TokenKind::Refresh)
    }

    /// Mint an access token and a refresh token for a user
    pub fn generate_token_pair(&self, user_id: Uuid) -> DomainResult<TokenPair> {
        Ok(TokenPair::new(
            self.generate_access_token(user_id)?,
            self.generate_refresh_token(user_id)?,
        ))
    }

    fn generate(&self, user_id: Uuid, kind: TokenKind) -> DomainResult<String> {
        let claims = Claims::new(user_id, self.keys(kind).lifetime);
        self.encode_claims(&claims, kind)
    }

    pub(crate) fn encode_claims(&self, claims: &Claims, kind: TokenKind) -> DomainResult<String> {
        encode(&self.header, claims, &self.keys(kind).encoding).map_err(|e| {
            tracing::error!(parent: &self.span, error = %e, ?kind, "Token signing failed");
            DomainError::internal(format!("Failed to generate token: {}", e))
        })
    }

    /// Verify a token's signature and expiry against the secret of `kind`
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded payload
    /// * `Err(TokenError::Expired)` - Signature valid but `exp` has passed
    /// * `Err(TokenError::InvalidSignature)` - Malformed token, wrong secret or algorithm
    /// * `Err(TokenError::Other)` - Any other verification failure
    pub fn verify_token(&self, token: &str, kind: TokenKind) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.keys(kind).decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let error = classify(e);
                tracing::debug!(parent: &self.span, ?kind, %error, "Token verification failed");
                error
            })
    }
}

pub(crate) fn classify(error: jsonwebtoken::errors::Error) -> TokenError {
    match error.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidToken
        | ErrorKind::InvalidSignature
        | ErrorKind::InvalidAlgorithm
        | ErrorKind::InvalidAlgorithmName
        | ErrorKind::MissingRequiredClaim(_)
        | ErrorKind::InvalidIssuer
        | ErrorKind::InvalidAudience
        | ErrorKind::InvalidSubject
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_) => TokenError::InvalidSignature,
        _ => TokenError::Other(error.to_string()),
    }
}
