//! SQLite repository implementations

pub mod property_repo_impl;
pub mod tenant_repo_impl;
pub mod lease_repo_impl;
pub mod rent_payment_repo_impl;
pub mod expense_repo_impl;
pub mod maintenance_repo_impl;
pub mod document_repo_impl;
pub mod report_repo_impl;

pub use property_repo_impl::SqlitePropertyRepository;
pub use tenant_repo_impl::SqliteTenantRepository;
pub use lease_repo_impl::SqliteLeaseRepository;
pub use rent_payment_repo_impl::SqliteRentPaymentRepository;
pub use expense_repo_impl::SqliteExpenseRepository;
pub use maintenance_repo_impl::SqliteMaintenanceRepository;
pub use document_repo_impl::SqliteDocumentRepository;
pub use report_repo_impl::SqliteReportRepository;

use landlord_core::error::DomainError;
use landlord_shared::EntityId;
use tracing::error;

/// Decode a stored enum column, rejecting text outside the closed set.
pub(crate) fn decode<T>(
    field: &'static str,
    value: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, DomainError> {
    parse(value).ok_or_else(|| DomainError::InvalidValue {
        field,
        value: value.to_string(),
    })
}

pub(crate) fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::DatabaseError(e.to_string())
}

pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

/// Map a failed insert or update. A foreign key violation means a referenced row is missing.
pub(crate) fn write_error(context: &str, e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_foreign_key_violation() {
            error!("Database error {}: {}", context, e);
            return DomainError::ValidationError(format!("{}: referenced record does not exist", context));
        }
    }
    db_error(context, e)
}

/// Map a failed delete. A foreign key violation means other rows still point at this one.
pub(crate) fn delete_error(entity: &'static str, id: EntityId, e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_foreign_key_violation() {
            error!("Cannot delete {} {}: still referenced", entity, id);
            return DomainError::InUse { entity, id };
        }
    }
    db_error(&format!("deleting {} {}", entity, id), e)
}
