//! Resources domain module.
//!
//! Resources represent read-only data that MCP clients can fetch by URI.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading
//! - `template.rs` - URI template matching for parameterized resources

pub mod definitions;
mod error;
mod registry;
mod service;
mod template;

pub use definitions::{ResourceDefinition, ResourceTemplateDefinition};
pub use error::ResourceError;
pub use registry::{get_all_resource_templates, get_all_resources};
pub use service::{ResourceEntry, ResourceService, TemplateEntry, TemplateRenderer};
pub use template::UriTemplate;
