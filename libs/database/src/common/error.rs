/// Error type for connection checks
///
/// Query-level failures stay as `sea_orm::DbErr` so callers can pass them through
/// untouched.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
