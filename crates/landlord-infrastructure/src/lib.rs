//! # Landlord Infrastructure
//! 
//! SQLite implementations of the core repository traits (adapters).

pub mod database;
pub mod error;

pub use database::{
    connect, create_pool, run_migrations, SqliteDocumentRepository, SqliteExpenseRepository,
    SqliteLeaseRepository, SqliteMaintenanceRepository, SqlitePropertyRepository,
    SqliteRentPaymentRepository, SqliteReportRepository, SqliteTenantRepository,
};
pub use error::InfraError;
