//! npm MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing npm package tools backed by
//! public HTTP APIs.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the server handler and the stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: `npmt-registry-info` and `npmt-suggestions`
//!   - **resources**: `config://app` and the `users://{userId}/profile` template
//!
//! # Example
//!
//! ```rust,no_run
//! use npm_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let server = McpServer::new(Config::from_env())?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
