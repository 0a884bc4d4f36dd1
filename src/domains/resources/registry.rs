//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()` or `get_all_resource_templates()`

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate};

use super::definitions::{
    AppConfigResource, ResourceDefinition, ResourceTemplateDefinition, UserProfileResource,
};
use super::error::ResourceError;
use super::service::{ResourceEntry, TemplateEntry};
use super::template::UriTemplate;

/// Helper function to create an annotated resource from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// Helper function to create a template entry from a definition.
fn build_template<T: ResourceTemplateDefinition>() -> Result<TemplateEntry, ResourceError> {
    let template = RawResourceTemplate {
        uri_template: T::URI_TEMPLATE.to_string(),
        name: T::NAME.to_string(),
        title: None,
        description: Some(T::DESCRIPTION.to_string()),
        mime_type: Some(T::MIME_TYPE.to_string()),
    }
    .no_annotation();

    Ok(TemplateEntry {
        template,
        matcher: UriTemplate::parse(T::URI_TEMPLATE)?,
        render: T::render,
    })
}

/// Get all registered resources as ResourceEntries.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![build_resource::<AppConfigResource>()]
}

/// Get all registered resource templates.
///
/// Fails if a template string cannot be parsed.
pub fn get_all_resource_templates() -> Result<Vec<TemplateEntry>, ResourceError> {
    Ok(vec![build_template::<UserProfileResource>()?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].resource.raw.uri, "config://app");
        assert_eq!(resources[0].resource.raw.name, "config");
    }

    #[test]
    fn test_get_all_resource_templates() {
        let templates = get_all_resource_templates().unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(
            templates[0].template.raw.uri_template,
            "users://{userId}/profile"
        );
        assert_eq!(templates[0].matcher.as_str(), "users://{userId}/profile");
    }
}
