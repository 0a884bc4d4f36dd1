//! Tool Router - lists the tools this server exposes.
//!
//! Each tool knows how to create its own route through
//! [`ToolDefinition::create_route`](super::ToolDefinition::create_route);
//! this module only names them. The server turns the returned registry into
//! the rmcp `ToolRouter` after checking it.

use super::definitions::{NpmClient, RegistryInfoTool, SuggestionsTool};
use super::registry::ToolRegistry;

/// Build the registry holding every tool, sharing one upstream client.
pub fn build_tool_registry<S>(client: NpmClient) -> ToolRegistry<S>
where
    S: Send + Sync + 'static,
{
    ToolRegistry::new()
        .register(RegistryInfoTool::new(client.clone()))
        .register(SuggestionsTool::new(client))
}
