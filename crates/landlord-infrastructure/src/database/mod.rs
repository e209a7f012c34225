//! Database module (SQLite adapters)

pub mod connection;
pub mod sqlite;

pub use connection::{connect, create_pool, run_migrations, MIGRATOR};
pub use sqlite::{
    SqliteDocumentRepository, SqliteExpenseRepository, SqliteLeaseRepository,
    SqliteMaintenanceRepository, SqlitePropertyRepository, SqliteRentPaymentRepository,
    SqliteReportRepository, SqliteTenantRepository,
};
