use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::auth::AccessTokenResponse;
use crate::handlers::error::handle_domain_error;

use cine_core::errors::DomainError;
use cine_core::repositories::{SessionRepository, UserRepository};

use super::cookie::{refresh_cookie, token_from_cookie_or_header};
use super::AppState;

/// Handler for POST /auth/refresh
///
/// Rotates the refresh token. The token is read from the `refresh_token`
/// cookie, or from a `refresh-token` header when no cookie is sent.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ..."
/// }
/// ```
/// The cookie is replaced with the new refresh token.
///
/// ## Errors
/// - 400 Bad Request: "Refresh token is required"
/// - 401 Unauthorized: "Refresh token not found", "Invalid session or already
///   logged out", "Refresh token has expired", "Invalid refresh token",
///   "User not found"
/// - 500 Internal Server Error: "An unexpected error occurred"
pub async fn refresh<U, S>(req: HttpRequest, state: web::Data<AppState<U, S>>) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
{
    let refresh_token = match token_from_cookie_or_header(&req, &state.cookie) {
        Some(token) => token,
        None => return handle_domain_error(DomainError::unauthorized("Refresh token not found")),
    };

    match state.auth_service.refresh_token(&refresh_token).await {
        Ok(tokens) => HttpResponse::Ok()
            .cookie(refresh_cookie(&state.cookie, &tokens.refresh_token))
            .json(AccessTokenResponse {
                access_token: tokens.access_token,
            }),
        Err(error) => handle_domain_error(error),
    }
}
