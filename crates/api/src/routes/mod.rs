//! API route definitions.

use axum::{Json, Router, http::StatusCode, response::IntoResponse, response::Response};
use serde_json::json;

use crate::AppState;
use valuar_shared::AppError;

pub mod health;
pub mod sectors;
pub mod valuations;

/// Creates the API router with all routes.
///
/// The calculator is a public lead-generation form; none of these routes
/// require authentication.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(sectors::routes())
        .merge(valuations::routes())
}

/// Renders an `AppError` as a JSON error response.
///
/// Server-side failures get a generic message; the detail stays in the logs.
pub(crate) fn error_response(err: &AppError) -> Response {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let message = if status.is_server_error() {
        "An error occurred".to_string()
    } else {
        err.to_string()
    };

    (
        status,
        Json(json!({
            "error": err.error_code().to_ascii_lowercase(),
            "message": message
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_hides_server_detail() {
        let response = error_response(&AppError::Database("connection refused".into()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_client_errors_keep_message() {
        let response = error_response(&AppError::Validation("bad field".into()));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
