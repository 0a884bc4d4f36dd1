//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type for everything that can fail
//! while the server starts up. Per-call tool failures never reach this type;
//! they are turned into error-flagged tool results inside each tool.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the resources domain.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Tool or resource registration failed.
    #[error("Registration error: {0}")]
    Registration(String),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The upstream client for the tools could not be built.
    #[error("Tool setup error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),
}

impl Error {
    /// Create a new registration error.
    pub fn registration(msg: impl Into<String>) -> Self {
        Self::Registration(msg.into())
    }

    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
