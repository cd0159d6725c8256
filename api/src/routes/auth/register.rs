use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{AccessTokenResponse, RegisterRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use cine_core::repositories::{SessionRepository, UserRepository};

use super::cookie::refresh_cookie;
use super::AppState;

/// Handler for POST /auth/register
///
/// Creates an account and signs the new user in.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Amr",
///     "email": "a@x.com",
///     "password": "Password123!"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "access_token": "eyJ..."
/// }
/// ```
/// The refresh token is set in the `refresh_token` HttpOnly cookie.
///
/// ## Errors
/// - 400 Bad Request: Validation failed or "User already exists."
/// - 500 Internal Server Error: "An unexpected error occurred"
pub async fn register<U, S>(
    state: web::Data<AppState<U, S>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .registration_service
        .register(request.into_inner().into())
        .await
    {
        Ok(tokens) => HttpResponse::Created()
            .cookie(refresh_cookie(&state.cookie, &tokens.refresh_token))
            .json(AccessTokenResponse {
                access_token: tokens.access_token,
            }),
        Err(error) => handle_domain_error(error),
    }
}
