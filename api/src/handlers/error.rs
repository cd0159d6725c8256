use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use validator::ValidationErrors;

use cine_core::errors::DomainError;

use crate::dto::{error_codes, validation_error_response, ErrorResponse, ErrorResponseExt};

/// Body message for every 500
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// BadRequest and Unauthorized carry their message to the client unchanged.
/// Internal errors are logged here with their message; the client only ever
/// sees [`INTERNAL_ERROR_MESSAGE`].
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::BadRequest { message } => {
            tracing::debug!(%message, "Request rejected");
            ErrorResponse::new(error_codes::BAD_REQUEST, message).to_response(StatusCode::BAD_REQUEST)
        }
        DomainError::Unauthorized { message } => {
            tracing::debug!(%message, "Request unauthorized");
            ErrorResponse::new(error_codes::UNAUTHORIZED, message)
                .to_response(StatusCode::UNAUTHORIZED)
        }
        DomainError::Internal { message } => {
            tracing::error!(%message, "Internal error while handling request");
            ErrorResponse::new(error_codes::INTERNAL_ERROR, INTERNAL_ERROR_MESSAGE)
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle DTO validation failures
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    validation_error_response(errors).to_response(StatusCode::BAD_REQUEST)
}

/// Turn malformed JSON bodies into the standard 400 body instead of actix's plain text
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = ErrorResponse::new(error_codes::BAD_REQUEST, err.to_string())
        .to_response(StatusCode::BAD_REQUEST);
    actix_web::error::InternalError::from_response(err, response).into()
}
