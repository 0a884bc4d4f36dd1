//! Static application configuration resource.

use super::ResourceDefinition;

/// App configuration resource (static).
pub struct AppConfigResource;

impl ResourceDefinition for AppConfigResource {
    const URI: &'static str = "config://app";
    const NAME: &'static str = "config";
    const DESCRIPTION: &'static str = "Application configuration";
    const MIME_TYPE: &'static str = "text/plain";

    fn content() -> String {
        "App configuration here".to_string()
    }
}
