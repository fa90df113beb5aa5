use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{HealthResponse, RootResponse, API_VERSION, SERVICE_TITLE};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        description = "NextStepAI HTTP API"
    ),
    paths(
        handlers::health::health_handler,
        handlers::root::root_handler
    ),
    components(
        schemas(
            HealthResponse,
            RootResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "meta", description = "Service information")
    )
)]
pub struct ApiDoc;

/// The generated document with title and version matching the root endpoint
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = SERVICE_TITLE.to_string();
    doc.info.version = API_VERSION.to_string();
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_both_endpoints() {
        let doc = openapi();

        assert_eq!(doc.info.title, "NextStepAI");
        assert_eq!(doc.info.version, "0.1.0");
        assert_eq!(
            doc.info.version,
            RootResponse::current().version
        );
        assert!(doc.paths.paths.contains_key("/health"));
        assert!(doc.paths.paths.contains_key("/"));
    }
}
