//! API helper functions

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use tracing::error;

use crate::errors::LinkVaultError;

/// Build an error response with the flat `{"error": ...}` body the API
/// uses everywhere.
pub fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(serde_json::json!({ "error": message }))
}

/// Build an error response from a service error (maps the error kind to
/// an HTTP status code).
///
/// Validation errors map to 400 and missing records to 404. Everything
/// else (storage, serialization) is an internal error that gets logged
/// here rather than leaking details to the client.
pub fn error_from_service(err: &LinkVaultError) -> HttpResponse {
    match err {
        LinkVaultError::Validation(_) => error_response(StatusCode::BAD_REQUEST, err.message()),
        LinkVaultError::NotFound(_) => error_response(StatusCode::NOT_FOUND, err.message()),
        _ => {
            error!("Internal error serving request: {}", err);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
