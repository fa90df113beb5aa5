use crate::models::RootResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET / handler - Service name and version
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Service name and version", body = RootResponse)
    ),
    tag = "meta"
)]
pub async fn root_handler() -> (StatusCode, Json<RootResponse>) {
    (StatusCode::OK, Json(RootResponse::current()))
}
