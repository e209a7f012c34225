//! Database connection pool and embedded migrations

use std::str::FromStr;
use std::time::Duration;

use landlord_shared::config::DatabaseSettings;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::error::InfraError;

/// Schema migrations compiled into the binary.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Open a pool on `url`, creating the database file if it does not exist yet.
pub async fn create_pool(url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(options)
        .await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), InfraError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Connect with the configured settings and bring the schema up to date.
pub async fn connect(settings: &DatabaseSettings) -> Result<SqlitePool, InfraError> {
    info!("Connecting to {}", settings.url);
    let pool = create_pool(&settings.url, settings.max_connections).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
