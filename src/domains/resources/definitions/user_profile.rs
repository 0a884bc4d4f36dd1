//! User profile resource template.

use std::collections::HashMap;

use super::ResourceTemplateDefinition;
use crate::domains::resources::error::ResourceError;

/// Profile of a single user, addressed by id.
pub struct UserProfileResource;

impl ResourceTemplateDefinition for UserProfileResource {
    const URI_TEMPLATE: &'static str = "users://{userId}/profile";
    const NAME: &'static str = "user-profile";
    const DESCRIPTION: &'static str = "Profile data for a user, by user id";
    const MIME_TYPE: &'static str = "text/plain";

    fn render(variables: &HashMap<String, String>) -> Result<String, ResourceError> {
        let user_id = variables
            .get("userId")
            .ok_or_else(|| ResourceError::missing_variable("userId"))?;

        Ok(format!(
            "Profile data for user {}: height 180cm, weight 75kg",
            user_id
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_profile() {
        let variables = HashMap::from([("userId".to_string(), "42".to_string())]);
        assert_eq!(
            UserProfileResource::render(&variables).unwrap(),
            "Profile data for user 42: height 180cm, weight 75kg"
        );
    }

    #[test]
    fn test_render_without_user_id() {
        let result = UserProfileResource::render(&HashMap::new());
        assert!(matches!(result, Err(ResourceError::MissingVariable(_))));
    }
}
