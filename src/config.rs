use std::env;
use anyhow::{bail, Context, Result};
use axum::http::HeaderValue;

/// Origins allowed to read responses cross-origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// `*`, any origin
    Any,
    /// Only these exact origins, echoed back when they match
    List(Vec<HeaderValue>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: AllowedOrigins,
    pub allow_credentials: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub service_host: String,
    pub service_port: u16,
    pub cors: CorsConfig,
    pub api_docs_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Every variable is optional; unset variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "8000".to_string())
            .trim()
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let allowed_origins = match lookup("CORS_ALLOW_ORIGINS") {
            Some(value) => parse_origins(&value)?,
            None => AllowedOrigins::Any,
        };

        let allow_credentials = match lookup("CORS_ALLOW_CREDENTIALS") {
            Some(value) => parse_bool("CORS_ALLOW_CREDENTIALS", &value)?,
            None => true,
        };

        let api_docs_enabled = match lookup("API_DOCS_ENABLED") {
            Some(value) => parse_bool("API_DOCS_ENABLED", &value)?,
            None => false,
        };

        Ok(Config {
            service_host,
            service_port,
            cors: CorsConfig {
                allowed_origins,
                allow_credentials,
            },
            api_docs_enabled,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
        match &self.cors.allowed_origins {
            AllowedOrigins::Any => tracing::info!("  CORS origins: *"),
            AllowedOrigins::List(origins) => tracing::info!("  CORS origins: {:?}", origins),
        }
        tracing::info!("  CORS credentials: {}", self.cors.allow_credentials);
        tracing::info!("  API docs: {}",
            if self.api_docs_enabled { "enabled" } else { "disabled" });
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => bail!("{} must be a boolean (true/false), got '{}'", name, other),
    }
}

/// A `*` anywhere in the list allows every origin.
fn parse_origins(value: &str) -> Result<AllowedOrigins> {
    let entries: Vec<&str> = value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect();

    if entries.is_empty() {
        bail!("CORS_ALLOW_ORIGINS must not be empty");
    }

    if entries.contains(&"*") {
        return Ok(AllowedOrigins::Any);
    }

    let origins = entries
        .into_iter()
        .map(|entry| {
            HeaderValue::from_str(entry)
                .with_context(|| format!("CORS_ALLOW_ORIGINS contains an invalid origin: '{}'", entry))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(AllowedOrigins::List(origins))
}
