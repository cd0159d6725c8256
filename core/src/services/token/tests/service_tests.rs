//! Unit tests for token service

use chrono::Utc;
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenKind, ACCESS_TOKEN_EXPIRY_SECONDS};
use crate::errors::{DomainError, TokenError};
use crate::services::token::service::classify;
use crate::services::token::{TokenService, TokenServiceConfig};

fn create_test_service() -> TokenService {
    TokenService::new(TokenServiceConfig::new("test-access-secret", "test-refresh-secret")).unwrap()
}

#[test]
fn test_rejects_empty_or_shared_secrets() {
    assert!(matches!(
        TokenService::new(TokenServiceConfig::new("", "refresh")),
        Err(DomainError::Internal { .. })
    ));
    assert!(matches!(
        TokenService::new(TokenServiceConfig::new("same", "same")),
        Err(DomainError::Internal { .. })
    ));
}

#[test]
fn test_access_token_round_trip() {
    let service = create_test_service();
    let user_id = Uuid::new_v4();

    let token = service.generate_access_token(user_id).unwrap();
    let claims = service.verify_token(&token, TokenKind::Access).unwrap();

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_EXPIRY_SECONDS);
}

#[test]
fn test_refresh_token_lifetime() {
    let service = create_test_service();

    let token = service.generate_refresh_token(Uuid::new_v4()).unwrap();
    let claims = service.verify_token(&token, TokenKind::Refresh).unwrap();

    assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
}

#[test]
fn test_token_kinds_do_not_cross_verify() {
    let service = create_test_service();
    let pair = service.generate_token_pair(Uuid::new_v4()).unwrap();

    assert_eq!(
        service.verify_token(&pair.access_token, TokenKind::Refresh),
        Err(TokenError::InvalidSignature)
    );
    assert_eq!(
        service.verify_token(&pair.refresh_token, TokenKind::Access),
        Err(TokenError::InvalidSignature)
    );
}

#[test]
fn test_tokens_minted_together_differ() {
    let service = create_test_service();
    let user_id = Uuid::new_v4();

    let first = service.generate_refresh_token(user_id).unwrap();
    let second = service.generate_refresh_token(user_id).unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_expired_token() {
    let service = create_test_service();
    let mut claims = Claims::new(Uuid::new_v4(), TokenKind::Refresh.default_lifetime());
    claims.iat = Utc::now().timestamp() - 120;
    claims.exp = Utc::now().timestamp() - 60;

    let token = service.encode_claims(&claims, TokenKind::Refresh).unwrap();

    assert_eq!(
        service.verify_token(&token, TokenKind::Refresh),
        Err(TokenError::Expired)
    );
}

#[test]
fn test_tampered_token() {
    let service = create_test_service();
    let victim = service.generate_refresh_token(Uuid::new_v4()).unwrap();
    let attacker = service.generate_refresh_token(Uuid::new_v4()).unwrap();

    // Swap in another token's payload while keeping the original signature
    let victim_parts: Vec<&str> = victim.split('.').collect();
    let attacker_parts: Vec<&str> = attacker.split('.').collect();
    let forged = format!("{}.{}.{}", victim_parts[0], attacker_parts[1], victim_parts[2]);

    assert_eq!(
        service.verify_token(&forged, TokenKind::Refresh),
        Err(TokenError::InvalidSignature)
    );
}

#[test]
fn test_garbage_token() {
    let service = create_test_service();

    assert_eq!(
        service.verify_token("not-a-jwt", TokenKind::Access),
        Err(TokenError::InvalidSignature)
    );
    assert_eq!(
        service.verify_token("", TokenKind::Refresh),
        Err(TokenError::InvalidSignature)
    );
}

#[test]
fn test_foreign_secret() {
    let service = create_test_service();
    let other = TokenService::new(TokenServiceConfig::new("other-access", "other-refresh")).unwrap();

    let token = other.generate_refresh_token(Uuid::new_v4()).unwrap();

    assert_eq!(
        service.verify_token(&token, TokenKind::Refresh),
        Err(TokenError::InvalidSignature)
    );
}

#[test]
fn test_not_yet_valid_token_is_other() {
    let service = create_test_service();
    let now = Utc::now().timestamp();
    let claims = serde_json::json!({
        "id": Uuid::new_v4().to_string(),
        "iat": now,
        "nbf": now + 3600,
        "exp": now + 7200,
        "jti": Uuid::new_v4().to_string(),
    });
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(b"test-refresh-secret"),
    )
    .unwrap();

    let result = service.verify_token(&token, TokenKind::Refresh);

    assert!(matches!(result, Err(TokenError::Other(_))));
}

#[test]
fn test_unclassified_failures_are_other() {
    let error = classify(JwtError::from(ErrorKind::ImmatureSignature));
    assert!(matches!(error, TokenError::Other(_)));

    let error = classify(JwtError::from(ErrorKind::ExpiredSignature));
    assert_eq!(error, TokenError::Expired);
}
