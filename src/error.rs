use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Every variant maps to an HTTP status code and is rendered as a JSON
/// `ErrorResponse`, so clients get the same error shape from every route.
#[derive(Debug)]
pub enum ApiError {
    /// No route matches the request method and path
    NotFound { method: Method, path: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound { method, path } => (
                StatusCode::NOT_FOUND,
                format!("Not found: {} {}", method, path),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
