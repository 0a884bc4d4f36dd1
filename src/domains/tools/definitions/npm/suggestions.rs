//! npm search suggestions tool.
//!
//! Queries npms.io for packages matching a keyword and returns a projection of
//! each hit. [`SuggestionItem`] is the single description of that projection:
//! decoding the upstream array into it drops every other field, serializing it
//! produces the output array, and its JSON Schema is embedded in the reply so
//! the client knows the item layout.

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::{handler::server::tool::cached_schema_for_type, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::client::NpmClient;
use super::common::{error_result, non_empty, success_result};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::{CallContext, ToolDefinition};

/// Parameters for the suggestions tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SuggestionsParams {
    #[schemars(description = "Keyword to search for npm package")]
    #[schemars(length(min = 1))]
    #[serde(deserialize_with = "non_empty")]
    pub keyword: String,
}

/// One search hit, projected from the npms.io response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SuggestionItem {
    pub package: PackageSummary,

    #[serde(rename = "searchScore")]
    #[schemars(description = "Search score of the package")]
    pub search_score: f64,

    pub score: PackageScore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PackageSummary {
    #[schemars(description = "Name of the package")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Scope of the package")]
    pub scope: Option<String>,

    #[schemars(description = "Version of the package")]
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Description of the package")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Keywords of the package")]
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PackageScore {
    #[serde(rename = "final")]
    #[schemars(description = "Final score of the package")]
    pub final_score: f64,

    pub detail: ScoreDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreDetail {
    #[schemars(description = "Maintenance score")]
    pub maintenance: f64,

    #[schemars(description = "Popularity score")]
    pub popularity: f64,

    #[schemars(description = "Quality score")]
    pub quality: f64,
}

/// npm Suggestions Tool implementation.
#[derive(Debug, Clone)]
pub struct SuggestionsTool {
    client: NpmClient,
}

impl SuggestionsTool {
    pub fn new(client: NpmClient) -> Self {
        Self { client }
    }

    /// Fetch and project the suggestions for `keyword`.
    pub async fn fetch(&self, keyword: &str, ctx: &CallContext) -> Result<Vec<SuggestionItem>, ToolError> {
        info!("Searching npm suggestions for: {}", keyword);

        let request = self
            .client
            .get(self.client.suggestions_url()?)
            .query(&[("q", keyword)]);
        self.client.fetch_json(request, ctx).await
    }

    /// Render the reply text: preamble, item schema, then the result array.
    pub fn render(keyword: &str, items: &[SuggestionItem]) -> Result<String, ToolError> {
        let schema = serde_json::to_string(&*cached_schema_for_type::<SuggestionItem>())
            .map_err(|e| ToolError::internal(e.to_string()))?;
        let result =
            serde_json::to_string(items).map_err(|e| ToolError::internal(e.to_string()))?;

        Ok(format!(
            "According to the query text {keyword}, we recommend the following npm packages.\n\
             I will provide it to you through the array. The structure of each item in the array is:\n\
             {schema}\n\
             \n\
             Result:\n\
             {result}\n"
        ))
    }

    /// Execute the tool logic.
    pub async fn execute(&self, params: &SuggestionsParams, ctx: &CallContext) -> CallToolResult {
        let rendered = self
            .fetch(&params.keyword, ctx)
            .await
            .and_then(|items| {
                info!("Found {} suggestion(s) for '{}'", items.len(), params.keyword);
                Self::render(&params.keyword, &items)
            });

        match rendered {
            Ok(text) => success_result(text),
            Err(e) => error_result(&e),
        }
    }
}

impl ToolDefinition for SuggestionsTool {
    const NAME: &'static str = "npmt-suggestions";

    const DESCRIPTION: &'static str =
        "通过英文关键字查询最相关的 npm 包，返回 npm 包的名称、版本、描述、关键字等信息。";

    type Params = SuggestionsParams;

    fn call(&self, params: Self::Params, ctx: CallContext) -> BoxFuture<'static, CallToolResult> {
        let tool = self.clone();
        async move { tool.execute(&params, &ctx).await }.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::npm::client::test_client;
    use crate::domains::tools::definitions::npm::common::first_text;
    use serde_json::json;
    use tokio_util::sync::CancellationToken;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn params(keyword: &str) -> SuggestionsParams {
        SuggestionsParams {
            keyword: keyword.to_string(),
        }
    }

    /// The JSON array after the `Result:` marker.
    fn result_array(text: &str) -> serde_json::Value {
        let (_, array) = text.split_once("Result:\n").expect("missing Result section");
        serde_json::from_str(array.trim()).unwrap()
    }

    fn react_upstream() -> serde_json::Value {
        json!([{
            "package": {
                "name": "react",
                "version": "18.0.0",
                "description": "...",
                "keywords": ["ui"],
                "date": "2022-03-29T17:07:18.000Z",
                "links": { "npm": "https://www.npmjs.com/package/react" },
                "publisher": { "username": "gnoff" }
            },
            "flags": { "insecure": 0 },
            "searchScore": 1,
            "highlight": "<em>react</em>",
            "score": {
                "final": 0.9,
                "detail": { "maintenance": 0.9, "popularity": 0.95, "quality": 0.85 }
            }
        }])
    }

    #[tokio::test]
    async fn test_react_projection() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/search/suggestions"))
            .and(query_param("q", "react"))
            .respond_with(ResponseTemplate::new(200).set_body_json(react_upstream()))
            .expect(1)
            .mount(&server)
            .await;

        let tool = SuggestionsTool::new(test_client(&server.uri()));
        let result = tool.call(params("react"), CallContext::default()).await;

        assert_eq!(result.is_error, Some(false));
        let text = first_text(&result);
        assert!(text.starts_with("According to the query text react,"));

        let array = result_array(&text);
        assert_eq!(
            array,
            json!([{
                "package": {
                    "name": "react",
                    "version": "18.0.0",
                    "description": "...",
                    "keywords": ["ui"]
                },
                "searchScore": 1.0,
                "score": {
                    "final": 0.9,
                    "detail": { "maintenance": 0.9, "popularity": 0.95, "quality": 0.85 }
                }
            }])
        );
        assert!(array[0]["package"].get("scope").is_none());
    }

    #[tokio::test]
    async fn test_reply_embeds_item_schema() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/search/suggestions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let tool = SuggestionsTool::new(test_client(&server.uri()));
        let result = tool.call(params("left pad"), CallContext::default()).await;
        let text = first_text(&result);

        assert!(text.contains("left pad"));
        let schema = serde_json::to_string(&*cached_schema_for_type::<SuggestionItem>()).unwrap();
        assert!(text.contains(&schema));
        assert!(schema.contains("searchScore"));
        assert!(schema.contains("Maintenance score"));
        assert_eq!(result_array(&text), json!([]));
    }

    #[tokio::test]
    async fn test_keyword_is_query_encoded() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/search/suggestions"))
            .and(query_param("q", "a&b c"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let tool = SuggestionsTool::new(test_client(&server.uri()));
        let result = tool.call(params("a&b c"), CallContext::default()).await;
        assert_eq!(result.is_error, Some(false));
    }

    #[tokio::test]
    async fn test_scope_is_kept_when_present() {
        let server = MockServer::start().await;
        let mut upstream = react_upstream();
        upstream[0]["package"]["scope"] = json!("unscoped");

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(upstream))
            .mount(&server)
            .await;

        let tool = SuggestionsTool::new(test_client(&server.uri()));
        let result = tool.call(params("react"), CallContext::default()).await;
        let array = result_array(&first_text(&result));
        assert_eq!(array[0]["package"]["scope"], "unscoped");
    }

    #[tokio::test]
    async fn test_hit_without_description_or_keywords() {
        let server = MockServer::start().await;
        let mut upstream = react_upstream();
        let package = upstream[0]["package"].as_object_mut().unwrap();
        package.remove("description");
        package.remove("keywords");

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(upstream))
            .mount(&server)
            .await;

        let tool = SuggestionsTool::new(test_client(&server.uri()));
        let result = tool.call(params("react"), CallContext::default()).await;

        assert_eq!(result.is_error, Some(false));
        let array = result_array(&first_text(&result));
        assert_eq!(
            array[0]["package"],
            json!({ "name": "react", "version": "18.0.0" })
        );
    }

    #[tokio::test]
    async fn test_missing_field_is_decode_error() {
        let server = MockServer::start().await;
        let mut upstream = react_upstream();
        upstream[0]["score"]["detail"]
            .as_object_mut()
            .unwrap()
            .remove("quality");

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(upstream))
            .mount(&server)
            .await;

        let tool = SuggestionsTool::new(test_client(&server.uri()));
        let result = tool.call(params("react"), CallContext::default()).await;

        assert_eq!(result.is_error, Some(true));
        assert!(first_text(&result).contains("quality"));
    }

    #[tokio::test]
    async fn test_upstream_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let tool = SuggestionsTool::new(test_client(&server.uri()));
        let result = tool.call(params("react"), CallContext::default()).await;

        assert_eq!(result.is_error, Some(true));
        assert!(first_text(&result).contains("503"));
    }

    #[tokio::test]
    async fn test_cancelled_call_sends_nothing() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let ct = CancellationToken::new();
        ct.cancel();

        let tool = SuggestionsTool::new(test_client(&server.uri()));
        let result = tool.call(params("react"), CallContext::new(ct)).await;

        assert_eq!(result.is_error, Some(true));
        assert!(first_text(&result).contains("cancelled"));
    }
}
