use crate::api_doc;
use crate::config::Config;
use crate::cors::cors_layer;
use crate::handlers;
use axum::{routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa_swagger_ui::SwaggerUi;

// Route path constants - single source of truth for all API paths

pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";
pub const OPENAPI_JSON: &str = "/openapi.json";
pub const DOCS: &str = "/docs";

/// Build and configure the application router
pub fn build_router(config: &Config) -> Router {
    let mut router = Router::new()
        .route(ROOT, get(handlers::root_handler))
        .route(HEALTH, get(handlers::health_handler));

    if config.api_docs_enabled {
        router = router.merge(SwaggerUi::new(DOCS).url(OPENAPI_JSON, api_doc::openapi()));
    }

    router
        // Must come after every route so it reaches all of them
        .method_not_allowed_fallback(handlers::not_found_handler)
        .fallback(handlers::not_found_handler)
        // Middleware
        .layer(cors_layer(&config.cors))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
