use actix_web::{web, HttpRequest, HttpResponse};

use crate::handlers::error::handle_domain_error;

use cine_core::errors::DomainError;
use cine_core::repositories::{SessionRepository, UserRepository};

use super::cookie::{removal_cookie, token_from_cookie};
use super::AppState;

/// Handler for POST /auth/logout
///
/// Revokes the session of the refresh token held in the `refresh_token`
/// cookie and clears the cookie. Other sessions of the user are untouched.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Logged out successfully"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: "Refresh token not found", "Invalid session or already logged out"
pub async fn logout<U, S>(req: HttpRequest, state: web::Data<AppState<U, S>>) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
{
    let refresh_token = match token_from_cookie(&req, &state.cookie) {
        Some(token) => token,
        None => return handle_domain_error(DomainError::unauthorized("Refresh token not found")),
    };

    match state.auth_service.logout(&refresh_token).await {
        Ok(ack) => HttpResponse::Ok()
            .cookie(removal_cookie(&state.cookie))
            .json(ack),
        Err(error) => handle_domain_error(error),
    }
}
