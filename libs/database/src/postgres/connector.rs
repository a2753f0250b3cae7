use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::PostgresConfig;
use crate::common::retry_with_backoff;

async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!("Connected to PostgreSQL");
    Ok(db)
}

/// Connect, retrying with exponential backoff up to `config.connect_retries` times.
///
/// Startup only; request handlers never retry.
///
/// ```ignore
/// use core_config::FromEnv;
/// use database::postgres::{connect_from_config_with_retry, PostgresConfig};
///
/// let db = connect_from_config_with_retry(PostgresConfig::from_env()?).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
) -> Result<DatabaseConnection, DbErr> {
    let retry_config = config.retry_config();
    let options = config.into_connect_options();

    retry_with_backoff(|| connect_with_options(options.clone()), retry_config).await
}

/// Apply every pending migration of `M`
///
/// ```ignore
/// use database::postgres::run_migrations;
/// use migration::Migrator;
///
/// run_migrations::<Migrator>(&db, "users_api").await?;
/// ```
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!(app = app_name, "Running database migrations");
    M::up(db, None).await?;
    info!(app = app_name, "Migrations completed");
    Ok(())
}
