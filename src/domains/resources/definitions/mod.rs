//! Resource definitions module.
//!
//! Each resource is defined in its own file with its URI (or URI template),
//! metadata and content.
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement `ResourceDefinition` or `ResourceTemplateDefinition`
//! 3. Export it here
//! 4. Register in `registry.rs`

pub mod app_config;
pub mod user_profile;

pub use app_config::AppConfigResource;
pub use user_profile::UserProfileResource;

use std::collections::HashMap;

use super::error::ResourceError;

/// Trait for resources with a fixed URI.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Get the content for this resource.
    fn content() -> String;
}

/// Trait for resources addressed through an RFC 6570 URI template.
pub trait ResourceTemplateDefinition {
    /// The URI template, e.g. `users://{userId}/profile`.
    const URI_TEMPLATE: &'static str;

    /// The display name of the template.
    const NAME: &'static str;

    /// A description of the template.
    const DESCRIPTION: &'static str;

    /// The MIME type of the rendered content.
    const MIME_TYPE: &'static str;

    /// Render the content for the variables extracted from a concrete URI.
    fn render(variables: &HashMap<String, String>) -> Result<String, ResourceError>;
}
