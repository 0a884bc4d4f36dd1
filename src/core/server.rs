//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool implements `ToolDefinition`, which provides its metadata and
//! the route the rmcp `ToolRouter` dispatches to. The tool list is built in
//! `domains/tools/router.rs`, so adding a tool does not touch this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::config::Config;
use super::error::Error;
use crate::domains::{
    resources::ResourceService,
    tools::{ToolRegistry, build_tool_registry, definitions::NpmClient},
};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between the tool router and the resource service.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Registers every resource and tool. Any failure here is fatal for
    /// startup.
    pub fn new(config: Config) -> super::Result<Self> {
        let client = NpmClient::new(&config.upstream)?;
        Self::with_tools(config, build_tool_registry(client))
    }

    /// Create a server exposing the tools in `tools`.
    ///
    /// Fails if two tools share a name.
    pub fn with_tools(config: Config, tools: ToolRegistry<Self>) -> super::Result<Self> {
        info!("Initializing MCP server");
        let config = Arc::new(config);
        debug!(server = %config.server.name, "Server configuration loaded");

        if config.security.auth_required {
            return Err(Error::config("authentication is not supported"));
        }

        info!("Registering resources and tools");
        let resource_service = Arc::new(ResourceService::new()?);

        if let Some(name) = tools.find_duplicate() {
            return Err(Error::registration(format!("duplicate tool name: {}", name)));
        }
        let tool_router = tools.into_router();

        info!(
            tools = tool_router.list_all().len(),
            "Resources and tools registered successfully"
        );

        Ok(Self {
            tool_router,
            config,
            resource_service,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Look up npm packages: search by English keyword with npmt-suggestions, \
                 then fetch registry details with npmt-registry-info."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }
}
