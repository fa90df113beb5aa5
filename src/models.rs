use serde::{Deserialize, Serialize};

/// Service name reported by the root endpoint and the API docs
pub const SERVICE_TITLE: &str = "NextStepAI";

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        HealthResponse {
            status: "ok".to_string(),
        }
    }
}

/// Response type for the root endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
}

impl RootResponse {
    pub fn current() -> Self {
        RootResponse {
            message: format!("{} API", SERVICE_TITLE),
            version: API_VERSION.to_string(),
        }
    }
}
