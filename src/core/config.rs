//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults. Tools never read the
//! environment themselves; they receive the values captured here.

use serde::{Deserialize, Serialize};

/// Default base URL of the npm registry proxy.
pub const DEFAULT_REGISTRY_BASE_URL: &str = "https://npm-trends-proxy.uidotdev.workers.dev";

/// Default base URL of the npms.io search API.
pub const DEFAULT_SUGGESTIONS_BASE_URL: &str = "https://api.npms.io";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Upstream HTTP APIs used by the tools.
    pub upstream: UpstreamConfig,

    /// Security configuration.
    pub security: SecurityConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Base URLs and client identity for the upstream npm APIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL for `GET /npm/registry/{name}`.
    pub registry_base_url: String,

    /// Base URL for `GET /v2/search/suggestions?q={keyword}`.
    pub suggestions_base_url: String,

    /// User-Agent header sent with every upstream request.
    pub user_agent: String,
}

/// Security configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Whether callers must authenticate. Authentication is not implemented,
    /// so this is always `false`.
    pub auth_required: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            registry_base_url: DEFAULT_REGISTRY_BASE_URL.to_string(),
            suggestions_base_url: DEFAULT_SUGGESTIONS_BASE_URL.to_string(),
            user_agent: format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            upstream: UpstreamConfig::default(),
            security: SecurityConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_LOG_LEVEL`, `MCP_NPM_REGISTRY_URL`.
    ///
    /// Runs before logging is initialized, so it does not log; see
    /// [`Config::env_overrides`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(url) = std::env::var("MCP_NPM_REGISTRY_URL") {
            config.upstream.registry_base_url = url;
        }

        if let Ok(url) = std::env::var("MCP_NPM_SUGGESTIONS_URL") {
            config.upstream.suggestions_base_url = url;
        }

        config
    }

    /// Human-readable notes for every upstream setting that differs from
    /// its default, for logging once the subscriber is installed.
    pub fn env_overrides(&self) -> Vec<String> {
        let mut overrides = Vec::new();
        if self.upstream.registry_base_url != DEFAULT_REGISTRY_BASE_URL {
            overrides.push(format!(
                "Using npm registry proxy at {}",
                self.upstream.registry_base_url
            ));
        }
        if self.upstream.suggestions_base_url != DEFAULT_SUGGESTIONS_BASE_URL {
            overrides.push(format!(
                "Using npm suggestions API at {}",
                self.upstream.suggestions_base_url
            ));
        }
        overrides
    }
}
