//! npm registry info tool.
//!
//! Fetches the full registry document of one package and hands it back to the
//! client as JSON text. The document is open-ended, so it is checked to be a
//! JSON object but otherwise passed through untouched: key order and number
//! formatting are the upstream's.

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, de};
use serde_json::value::RawValue;
use tracing::info;

use super::client::NpmClient;
use super::common::{error_result, non_empty, success_result};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::{CallContext, ToolDefinition};

/// A registry document as returned by the registry proxy, kept as raw JSON.
///
/// Only JSON objects decode; any other value is a decode error.
#[derive(Debug)]
pub struct RegistryDocument(Box<RawValue>);

impl RegistryDocument {
    /// The document text exactly as the upstream sent it.
    pub fn as_str(&self) -> &str {
        self.0.get()
    }
}

impl<'de> Deserialize<'de> for RegistryDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        if !raw.get().trim_start().starts_with('{') {
            return Err(de::Error::custom("registry document is not a JSON object"));
        }
        Ok(Self(raw))
    }
}

/// Parameters for the registry info tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RegistryInfoParams {
    /// Name of the npm package, e.g. `left-pad` or `@types/node`.
    #[schemars(description = "Name of the npm package")]
    #[schemars(length(min = 1))]
    #[serde(deserialize_with = "non_empty")]
    pub name: String,
}

/// npm Registry Info Tool implementation.
#[derive(Debug, Clone)]
pub struct RegistryInfoTool {
    client: NpmClient,
}

impl RegistryInfoTool {
    pub fn new(client: NpmClient) -> Self {
        Self { client }
    }

    /// Fetch the registry document for `name`.
    pub async fn fetch(&self, name: &str, ctx: &CallContext) -> Result<RegistryDocument, ToolError> {
        info!("Fetching registry info for package: {}", name);

        let request = self.client.get(self.client.registry_url(name)?);
        self.client.fetch_json(request, ctx).await
    }

    /// Execute the tool logic.
    pub async fn execute(&self, params: &RegistryInfoParams, ctx: &CallContext) -> CallToolResult {
        match self.fetch(&params.name, ctx).await {
            Ok(document) => success_result(document.as_str().to_string()),
            Err(e) => error_result(&e),
        }
    }
}

impl ToolDefinition for RegistryInfoTool {
    const NAME: &'static str = "npmt-registry-info";

    const DESCRIPTION: &'static str =
        "根据 npm 包的名称，返回注册表中该包的详细信息，包括名称、版本、描述、关键字等。";

    type Params = RegistryInfoParams;

    fn call(&self, params: Self::Params, ctx: CallContext) -> BoxFuture<'static, CallToolResult> {
        let tool = self.clone();
        async move { tool.execute(&params, &ctx).await }.boxed()
    }
}
