//! PostgreSQL connection management, migrations and health checks on top of SeaORM.

mod config;
mod connector;
mod health;

pub use config::PostgresConfig;
pub use connector::{connect_from_config_with_retry, run_migrations};
pub use health::{check_health, check_health_detailed, HealthStatus};

pub use sea_orm::DatabaseConnection;
