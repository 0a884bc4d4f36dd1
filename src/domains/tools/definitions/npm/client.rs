//! HTTP client for the upstream npm APIs.

use reqwest::{Client, RequestBuilder};
use url::{PathSegmentsMut, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::core::config::UpstreamConfig;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::CallContext;

/// Shared client for the npm registry proxy and the npms.io search API.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct NpmClient {
    http: Client,
    registry_base: Url,
    suggestions_base: Url,
}

impl NpmClient {
    /// Build a client for the configured upstreams.
    ///
    /// Both base URLs are parsed up front so a bad override fails startup
    /// instead of every call.
    pub fn new(upstream: &UpstreamConfig) -> Result<Self, ToolError> {
        let http = Client::builder()
            .user_agent(upstream.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            registry_base: parse_base(&upstream.registry_base_url)?,
            suggestions_base: parse_base(&upstream.suggestions_base_url)?,
        })
    }

    /// URL of the registry document for `name`.
    ///
    /// The name is percent-encoded as a path segment, so `#`, `?` and `%`
    /// stay part of the name. A scoped name keeps its `@scope/pkg` shape.
    pub fn registry_url(&self, name: &str) -> Result<Url, ToolError> {
        let scoped = name
            .strip_prefix('@')
            .and_then(|rest| rest.split_once('/'))
            .map(|(scope, package)| (format!("@{scope}"), package));

        append_segments(&self.registry_base, |segments| {
            segments.extend(["npm", "registry"]);
            match &scoped {
                Some((scope, package)) => {
                    segments.push(scope).push(package);
                }
                None => {
                    segments.push(name);
                }
            }
        })
    }

    /// URL of the search suggestions endpoint (query added per request).
    pub fn suggestions_url(&self) -> Result<Url, ToolError> {
        append_segments(&self.suggestions_base, |segments| {
            segments.extend(["v2", "search", "suggestions"]);
        })
    }

    /// Start a GET request against `url`.
    pub fn get(&self, url: Url) -> RequestBuilder {
        debug!(url = %url, "GET request");
        self.http.get(url)
    }

    /// Send `request` and decode its JSON body into `T`.
    ///
    /// The request races the call's cancellation token; a cancelled call
    /// yields [`ToolError::Cancelled`] and the in-flight request is dropped.
    pub async fn fetch_json<T>(&self, request: RequestBuilder, ctx: &CallContext) -> Result<T, ToolError>
    where
        T: DeserializeOwned,
    {
        let fetch = async move {
            let response = request.send().await?.error_for_status()?;
            let body = response.text().await?;
            Ok::<T, ToolError>(serde_json::from_str(&body)?)
        };

        tokio::select! {
            biased;
            _ = ctx.cancelled() => Err(ToolError::Cancelled),
            result = fetch => result,
        }
    }
}

fn parse_base(raw: &str) -> Result<Url, ToolError> {
    let url = Url::parse(raw).map_err(|e| ToolError::invalid_url(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ToolError::invalid_url(format!("{raw}: not a base URL")));
    }
    Ok(url)
}

/// Clone `base` and append path segments after any existing base path.
fn append_segments<F>(base: &Url, build: F) -> Result<Url, ToolError>
where
    F: FnOnce(&mut PathSegmentsMut<'_>),
{
    let mut url = base.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| ToolError::invalid_url(format!("{base}: not a base URL")))?;
        segments.pop_if_empty();
        build(&mut segments);
    }
    Ok(url)
}

/// Client whose upstreams both point at `base_url`.
#[cfg(test)]
pub fn test_client(base_url: &str) -> NpmClient {
    let upstream = UpstreamConfig {
        registry_base_url: base_url.to_string(),
        suggestions_base_url: base_url.to_string(),
        ..Default::default()
    };
    NpmClient::new(&upstream).unwrap()
}
