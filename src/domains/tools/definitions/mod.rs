//! Tool definitions module.
//!
//! Each tool is defined in its own file and implements [`ToolDefinition`],
//! which ties together the tool's name, description, parameter schema and
//! handler. The parameter type is the only schema: it validates incoming
//! arguments (serde) and produces the advertised `inputSchema` (schemars).

pub mod npm;

pub use npm::{
    NpmClient, RegistryInfoParams, RegistryInfoTool, SuggestionItem, SuggestionsParams,
    SuggestionsTool,
};

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Per-invocation context handed to a tool handler.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    ct: CancellationToken,
}

impl CallContext {
    /// Wrap the cancellation token of the incoming request.
    pub fn new(ct: CancellationToken) -> Self {
        Self { ct }
    }

    /// Resolves once the client cancels the call.
    pub async fn cancelled(&self) {
        self.ct.cancelled().await
    }
}

/// Contract every tool implements to be registered with the server.
pub trait ToolDefinition: Clone + Send + Sync + 'static {
    /// Tool name as registered in MCP. Unique across the registry.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Validated arguments accepted by the tool.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Run the tool. Upstream failures are reported as an error-flagged
    /// result, never as a protocol error.
    fn call(&self, params: Self::Params, ctx: CallContext) -> BoxFuture<'static, CallToolResult>;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Decode raw call arguments into the parameter type.
    fn parse_params(arguments: JsonObject) -> Result<Self::Params, McpError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }

    /// Create the route binding this tool into an rmcp `ToolRouter`.
    fn create_route<S>(self) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let tool = self.clone();
            let args = ctx.arguments.clone().unwrap_or_default();
            let call_ctx = CallContext::new(ctx.request_context.ct.clone());
            async move {
                let params = Self::parse_params(args)?;
                info!(tool = Self::NAME, "Tool call");
                let result = tool.call(params, call_ctx).await;
                debug!(tool = Self::NAME, is_error = ?result.is_error, "Tool call finished");
                Ok(result)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_params_rejects_missing_field() {
        let err = RegistryInfoTool::parse_params(JsonObject::new()).unwrap_err();
        assert!(err.message.contains("name"));
    }

    #[test]
    fn test_parse_params_rejects_empty_string() {
        let mut args = JsonObject::new();
        args.insert("keyword".into(), serde_json::json!(""));
        assert!(SuggestionsTool::parse_params(args).is_err());
    }

    #[test]
    fn test_to_tool_exposes_schema() {
        let tool = SuggestionsTool::to_tool();
        assert_eq!(tool.name, "npmt-suggestions");
        let properties = tool.input_schema.get("properties").unwrap();
        assert!(properties.get("keyword").is_some());
        assert_eq!(
            tool.input_schema.get("required"),
            Some(&serde_json::json!(["keyword"]))
        );
    }

    #[tokio::test]
    async fn test_call_context_cancelled() {
        let ct = CancellationToken::new();
        let ctx = CallContext::new(ct.clone());
        ct.cancel();
        ctx.cancelled().await;
        assert!(ct.is_cancelled());
    }
}
