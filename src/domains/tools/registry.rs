//! Tool Registry - collects tool definitions before they reach the router.
//!
//! This module provides:
//! - Registration of each [`ToolDefinition`] in order
//! - The names of all registered tools
//! - A uniqueness check used by the server at startup
//!
//! rmcp's `ToolRouter` keeps one route per name, so a second tool with the
//! same name would silently replace the first. The registry keeps every
//! name it was given so the server can refuse to start instead.

use std::collections::HashSet;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::ToolDefinition;

/// Tool registry - the ordered list of tools exposed by a server `S`.
pub struct ToolRegistry<S> {
    names: Vec<&'static str>,
    router: ToolRouter<S>,
}

impl<S> ToolRegistry<S>
where
    S: Send + Sync + 'static,
{
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            router: ToolRouter::new(),
        }
    }

    /// Register one tool.
    pub fn register<T: ToolDefinition>(mut self, tool: T) -> Self {
        self.names.push(T::NAME);
        self.router = self.router.with_route(tool.create_route());
        self
    }

    /// Names of all registered tools, in registration order.
    pub fn tool_names(&self) -> &[&'static str] {
        &self.names
    }

    /// First name registered more than once, if any.
    pub fn find_duplicate(&self) -> Option<&'static str> {
        let mut seen = HashSet::new();
        self.names.iter().copied().find(|name| !seen.insert(*name))
    }

    /// Hand the routes over to the server.
    pub fn into_router(self) -> ToolRouter<S> {
        self.router
    }
}

impl<S> Default for ToolRegistry<S>
where
    S: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
