//! Extractors shared by the domain routers.

pub mod string_field;
pub mod uuid_path;
pub mod validated_json;

pub use string_field::{StringField, is_string};
pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
