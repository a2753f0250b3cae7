//! Request fields declared as JSON strings.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::IgnoredAny};
use std::borrow::Cow;
use validator::{ValidateEmail, ValidateLength, ValidationError};

/// A JSON field expected to hold a string.
///
/// A number, bool, null, array or object deserializes to
/// [`StringField::WrongType`] instead of rejecting the whole body, so
/// [`is_string`] reports it next to the body's other violations. `length` and
/// `email` checks skip a `WrongType` value.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateUser {
///     #[serde(default)]
///     #[validate(
///         length(min = 1, message = "Name is required"),
///         custom(function = "is_string", message = "Name must be a string")
///     )]
///     name: StringField,
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringField {
    Value(String),
    WrongType,
}

impl StringField {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StringField::Value(s) => Some(s),
            StringField::WrongType => None,
        }
    }

    /// The submitted string; empty for `WrongType`, which validation rejects.
    pub fn into_string(self) -> String {
        match self {
            StringField::Value(s) => s,
            StringField::WrongType => String::new(),
        }
    }
}

impl Default for StringField {
    fn default() -> Self {
        StringField::Value(String::new())
    }
}

impl From<String> for StringField {
    fn from(value: String) -> Self {
        StringField::Value(value)
    }
}

impl From<&str> for StringField {
    fn from(value: &str) -> Self {
        StringField::Value(value.to_string())
    }
}

impl<'de> Deserialize<'de> for StringField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Other(IgnoredAny),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => StringField::Value(s),
            Raw::Other(_) => StringField::WrongType,
        })
    }
}

impl Serialize for StringField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StringField::Value(s) => serializer.serialize_str(s),
            StringField::WrongType => serializer.serialize_none(),
        }
    }
}

impl ValidateLength<u64> for StringField {
    fn length(&self) -> Option<u64> {
        self.as_str().map(|s| s.chars().count() as u64)
    }
}

impl ValidateEmail for StringField {
    fn as_email_string(&self) -> Option<Cow<'_, str>> {
        self.as_str().map(Cow::Borrowed)
    }
}

/// `custom` validator failing on [`StringField::WrongType`]
pub fn is_string(value: &StringField) -> Result<(), ValidationError> {
    match value {
        StringField::Value(_) => Ok(()),
        StringField::WrongType => Err(ValidationError::new("string")),
    }
}
