use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    NotFound(String),

    /// Persistence failure, carried unchanged from the store
    #[error("Store error: {0}")]
    Store(#[from] DbErr),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    pub fn not_found_by_id(id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("User with ID {} not found", id))
    }

    pub fn not_found_by_email(email: &str) -> Self {
        Self::NotFound(format!("User with email {} not found", email))
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Validation(e) => AppError::ValidationError(e),
            UserError::NotFound(msg) => AppError::NotFound(msg),
            UserError::Store(e) => AppError::Database(e),
            UserError::PasswordHash(msg) => {
                AppError::InternalServerError(format!("Password hashing failed: {}", msg))
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            UserError::not_found_by_id("42").to_string(),
            "User with ID 42 not found"
        );
        assert_eq!(
            UserError::not_found_by_email("a@b.io").to_string(),
            "User with email a@b.io not found"
        );
    }

    #[test]
    fn test_status_codes() {
        let status = |e: UserError| e.into_response().status();

        assert_eq!(status(UserError::not_found_by_id("1")), StatusCode::NOT_FOUND);
        assert_eq!(
            status(UserError::Validation(ValidationErrors::new())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(UserError::Store(DbErr::Custom("boom".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status(UserError::PasswordHash("bad salt".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
