//! npm tools module.
//!
//! Tools that proxy npm package data from public HTTP APIs:
//! - `registry_info`: the registry document of a single package
//! - `suggestions`: search suggestions for a keyword, via npms.io
//!
//! Both share one [`NpmClient`] and the same failure policy: any upstream
//! problem becomes an error-flagged result carrying the error text.

pub mod client;
pub mod common;
pub mod registry_info;
pub mod suggestions;

pub use client::NpmClient;
pub use registry_info::{RegistryInfoParams, RegistryInfoTool};
pub use suggestions::{SuggestionItem, SuggestionsParams, SuggestionsTool};
