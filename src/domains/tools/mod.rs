//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//!   and the [`ToolDefinition`] contract they implement
//! - `router.rs` - Lists the tools this server exposes
//! - `registry.rs` - Collects tool routes and checks their names
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` implementing `ToolDefinition`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `build_tool_registry()`

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use definitions::{CallContext, ToolDefinition};
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_registry;
