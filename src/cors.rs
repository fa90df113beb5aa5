use crate::config::{AllowedOrigins, CorsConfig};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Builds the cross-origin layer applied to every response.
///
/// Browsers refuse credentialed responses that carry
/// `Access-Control-Allow-Origin: *`, and tower-http rejects that combination
/// outright. With a wildcard origin the credentials flag is dropped and `*`
/// is sent on every response. An explicit origin list echoes the matching
/// request origin and honors the flag, mirroring the preflight's requested
/// method and headers.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    match &config.allowed_origins {
        AllowedOrigins::Any => {
            if config.allow_credentials {
                tracing::warn!(
                    "CORS_ALLOW_CREDENTIALS ignored: credentials cannot be combined with a wildcard origin"
                );
            }

            CorsLayer::new()
                .allow_origin(AllowOrigin::any())
                .allow_methods(AllowMethods::any())
                .allow_headers(AllowHeaders::any())
        }
        AllowedOrigins::List(origins) => CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins.iter().cloned()))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(config.allow_credentials),
    }
}
