use crate::error::ApiError;
use axum::http::{Method, Uri};

/// Fallback for unknown paths and for known paths hit with an unsupported method.
///
/// Both cases answer 404; a wrong method on a known path is not reported as 405.
pub async fn not_found_handler(method: Method, uri: Uri) -> ApiError {
    tracing::debug!("No route for {} {}", method, uri.path());
    ApiError::NotFound {
        method,
        path: uri.path().to_string(),
    }
}
