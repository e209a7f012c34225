//! Storage setup errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
