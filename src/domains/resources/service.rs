//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access. It holds the
//! static resources and the URI templates registered in `registry.rs`.

use std::collections::HashMap;

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use tracing::{debug, info};

use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use super::template::UriTemplate;

/// Renders a templated resource from the variables of a matched URI.
pub type TemplateRenderer = fn(&HashMap<String, String>) -> Result<String, ResourceError>;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Static resources, keyed by URI.
    resources: HashMap<String, ResourceEntry>,

    /// Resource templates, tried in registration order.
    templates: Vec<TemplateEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The text content of this resource.
    pub content: String,
}

/// A registered resource template.
#[derive(Debug, Clone)]
pub struct TemplateEntry {
    /// The template metadata advertised to clients.
    pub template: ResourceTemplate,

    /// Parsed form of the URI template.
    pub matcher: UriTemplate,

    /// Content renderer for matching URIs.
    pub render: TemplateRenderer,
}

impl ResourceService {
    /// Create a new ResourceService holding every registered resource.
    pub fn new() -> Result<Self, ResourceError> {
        info!("Initializing ResourceService");

        let mut service = Self {
            resources: HashMap::new(),
            templates: Vec::new(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }
        for entry in get_all_resource_templates()? {
            service.register_template(entry);
        }

        Ok(service)
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// Register a resource template.
    pub fn register_template(&mut self, entry: TemplateEntry) {
        info!("Registering resource template: {}", entry.matcher.as_str());
        self.templates.push(entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates
            .iter()
            .map(|entry| entry.template.clone())
            .collect()
    }

    /// Read a resource by URI.
    ///
    /// Static resources take precedence over templates.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        if let Some(entry) = self.resources.get(uri) {
            return Ok(ReadResourceResult {
                contents: vec![ResourceContents::text(entry.content.clone(), uri)],
            });
        }

        for entry in &self.templates {
            if let Some(variables) = entry.matcher.matches(uri) {
                debug!("{} matched template {}", uri, entry.matcher.as_str());
                let text = (entry.render)(&variables)?;
                return Ok(ReadResourceResult {
                    contents: vec![ResourceContents::text(text, uri)],
                });
            }
        }

        Err(ResourceError::not_found(uri))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ResourceService {
        ResourceService::new().unwrap()
    }

    fn text_of(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            other => panic!("expected text contents, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = service();
        assert_eq!(service.list_resources().await.len(), 1);
        assert_eq!(service.list_resource_templates().await.len(), 1);
    }

    #[tokio::test]
    async fn test_read_static_resource() {
        let result = service().read_resource("config://app").await.unwrap();
        assert_eq!(text_of(&result), "App configuration here");
    }

    #[tokio::test]
    async fn test_read_templated_resource() {
        let result = service().read_resource("users://7/profile").await.unwrap();
        assert_eq!(
            text_of(&result),
            "Profile data for user 7: height 180cm, weight 75kg"
        );
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let result = service().read_resource("users://7/settings").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
