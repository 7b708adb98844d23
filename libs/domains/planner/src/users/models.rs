use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::patch::non_null;

/// A person who can be assigned tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    /// Unique across all users, compared exactly
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
}

/// DTO for updating a user; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(email(message = "Valid email is required"))]
    pub email: Option<String>,
}

impl UpdateUser {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

impl User {
    pub(crate) fn apply_update(&mut self, input: UpdateUser) {
        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(email) = input.email {
            self.email = email;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_rejects_bad_email() {
        let input = CreateUser {
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_create_user_rejects_empty_name() {
        let input = CreateUser {
            name: String::new(),
            email: "ada@example.com".to_string(),
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_update_user_validates_present_fields_only() {
        assert!(UpdateUser::default().validate().is_ok());

        let input = UpdateUser {
            email: Some("nope".to_string()),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_update_user_rejects_null_name() {
        let result: Result<UpdateUser, _> = serde_json::from_str(r#"{"name": null}"#);
        assert!(result.is_err());
    }
}
