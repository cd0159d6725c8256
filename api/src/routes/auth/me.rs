use actix_web::{web, HttpResponse};

use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

use cine_core::repositories::{SessionRepository, UserRepository};

use super::AppState;

/// Handler for POST /auth/me
///
/// Requires `Authorization: Bearer {access_token}`.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "id": "550e8400-e29b-41d4-a716-446655440000",
///     "name": "Amr",
///     "email": "a@x.com",
///     "created_at": "2024-01-01T00:00:00Z",
///     "updated_at": "2024-01-01T00:00:00Z"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing, expired or invalid access token
/// - 400 Bad Request: "User not found"
pub async fn me<U, S>(state: web::Data<AppState<U, S>>, auth: AuthContext) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
{
    match state.auth_service.get_user_info(auth.user_id).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(error) => handle_domain_error(error),
    }
}
