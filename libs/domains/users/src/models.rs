use axum_helpers::{StringField, is_string};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// A stored user, as the service returns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Stored password (see `PasswordStorage`)
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User without the password field, returned by the create endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Payload for creating a user.
///
/// Missing fields deserialize as empty strings and non-string values as
/// [`StringField::WrongType`], so both are reported by validation together
/// with the other violations.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Name is required"),
        custom(function = "is_string", message = "Name must be a string")
    )]
    #[schema(value_type = String, example = "Ada Lovelace")]
    pub name: StringField,

    #[serde(default)]
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email must be valid"),
        custom(function = "is_string", message = "Email must be valid")
    )]
    #[schema(value_type = String, example = "ada@example.com")]
    pub email: StringField,

    #[serde(default)]
    #[validate(
        length(min = 8, message = "Password must be at least 8 characters long"),
        custom(function = "required", message = "Password is required"),
        custom(function = "is_string", message = "Password must be a string")
    )]
    #[schema(value_type = String, example = "correct-horse-battery")]
    pub password: StringField,
}

/// Partial update payload; absent or null fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(custom(function = "is_string", message = "Name must be a string"))]
    #[schema(value_type = Option<String>)]
    pub name: Option<StringField>,

    #[validate(
        email(message = "Email must be valid"),
        custom(function = "is_string", message = "Email must be valid")
    )]
    #[schema(value_type = Option<String>)]
    pub email: Option<StringField>,

    #[validate(
        length(min = 8, message = "Password must be at least 8 characters long"),
        custom(function = "is_string", message = "Password must be a string")
    )]
    #[schema(value_type = Option<String>)]
    pub password: Option<StringField>,
}

fn required(value: &StringField) -> Result<(), ValidationError> {
    if value.as_str() == Some("") {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Record handed to the repository on create, password already prepared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Fields to overwrite on update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

impl User {
    /// Apply `changes` in place, refreshing `updated_at`
    pub fn apply(&mut self, changes: UserChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(password) = changes.password {
            self.password = password;
        }
        self.updated_at = Utc::now();
    }
}
