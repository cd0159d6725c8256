use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{AccessTokenResponse, LoginRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use cine_core::repositories::{SessionRepository, UserRepository};

use super::cookie::refresh_cookie;
use super::AppState;

/// Handler for POST /auth/login
///
/// Any previous sessions of the user are revoked.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "a@x.com",
///     "password": "Password123!"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Validation failed
/// - 401 Unauthorized: "Invalid credentials"
pub async fn login<U, S>(
    state: web::Data<AppState<U, S>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state.auth_service.login(request.into_inner().into()).await {
        Ok(tokens) => HttpResponse::Ok()
            .cookie(refresh_cookie(&state.cookie, &tokens.refresh_token))
            .json(AccessTokenResponse {
                access_token: tokens.access_token,
            }),
        Err(error) => handle_domain_error(error),
    }
}
