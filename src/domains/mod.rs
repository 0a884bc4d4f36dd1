//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: npm tools that MCP clients can call
//! - **resources**: read-only resources that MCP clients can fetch

pub mod resources;
pub mod tools;
