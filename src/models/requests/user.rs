//! User-related request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::User;
use crate::validators::validate_not_blank;

/// Request payload for creating or replacing a user
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserRequest {
    /// Display name (required, at most 100 characters)
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 100, message = "Name must be at most 100 characters")
    )]
    #[schema(example = "Ana")]
    pub name: String,
    /// Email address, unique across users
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "ana@x.com")]
    pub email: String,
    /// Age in years
    #[serde(default)]
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    #[schema(example = 30)]
    pub age: i32,
}

impl From<UserRequest> for User {
    fn from(req: UserRequest) -> Self {
        User::new(req.name.trim(), req.email.trim().to_lowercase(), req.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> UserRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_request_passes() {
        let req = request(json!({ "name": "Ana", "email": "ana@x.com", "age": 30 }));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_client_supplied_id_is_ignored() {
        let req = request(json!({ "id": 99, "name": "Ana", "email": "ana@x.com", "age": 30 }));
        let user: User = req.into();
        assert_eq!(user.id, None);
    }

    #[test]
    fn test_missing_age_defaults_to_zero() {
        let req = request(json!({ "name": "Ana", "email": "ana@x.com" }));
        assert_eq!(req.age, 0);
    }

    #[test]
    fn test_blank_name_and_bad_email_are_rejected() {
        let req = request(json!({ "name": "   ", "email": "not-an-email", "age": 30 }));
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn test_negative_age_is_rejected() {
        let req = request(json!({ "name": "Ana", "email": "ana@x.com", "age": -1 }));
        assert!(req.validate().unwrap_err().field_errors().contains_key("age"));
    }

    #[test]
    fn test_email_is_normalized_on_conversion() {
        let req = request(json!({ "name": " Ana ", "email": " Ana@X.com ", "age": 30 }));
        let user: User = req.into();
        assert_eq!(user.name, "Ana");
        assert_eq!(user.email, "ana@x.com");
    }
}
