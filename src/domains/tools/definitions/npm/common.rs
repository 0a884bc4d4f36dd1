//! Common utilities shared across npm tools.

use rmcp::model::{CallToolResult, Content};
use serde::{Deserialize, Deserializer, de};
use tracing::warn;

use crate::domains::tools::ToolError;

/// Deserialize a string argument that must not be empty.
pub fn non_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.is_empty() {
        return Err(de::Error::custom("value must not be empty"));
    }
    Ok(value)
}

/// Create an error result from a tool failure.
pub fn error_result(error: &ToolError) -> CallToolResult {
    warn!("{}", error);
    CallToolResult::error(vec![Content::text(format!("Error: {}", error))])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Text of the first content block, for assertions.
#[cfg(test)]
pub fn first_text(result: &CallToolResult) -> String {
    use rmcp::model::RawContent;

    assert_eq!(result.content.len(), 1, "expected a single content block");
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.clone(),
        other => panic!("expected text content, got {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Args {
        #[serde(deserialize_with = "non_empty")]
        value: String,
    }

    #[test]
    fn test_non_empty_accepts_text() {
        let args: Args = serde_json::from_str(r#"{"value": "lodash"}"#).unwrap();
        assert_eq!(args.value, "lodash");
    }

    #[test]
    fn test_non_empty_rejects_empty() {
        let err = serde_json::from_str::<Args>(r#"{"value": ""}"#).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_error_result_flags_error() {
        let result = error_result(&ToolError::Cancelled);
        assert_eq!(result.is_error, Some(true));
        assert_eq!(first_text(&result), "Error: Request cancelled by the client");
    }

    #[test]
    fn test_success_result() {
        let result = success_result("ok".to_string());
        assert_eq!(result.is_error, Some(false));
        assert_eq!(first_text(&result), "ok");
    }
}
