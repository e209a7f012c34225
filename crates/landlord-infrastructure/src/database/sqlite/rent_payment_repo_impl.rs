// ============================================================================
// Landlord Infrastructure - SQLite Rent Payment Repository
// File: crates/landlord-infrastructure/src/database/sqlite/rent_payment_repo_impl.rs
// ============================================================================
//! Rent payments are keyed by (lease_id, month); the schema enforces it with a
//! UNIQUE constraint, reported here as `DomainError::DuplicateRentPayment`.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use tracing::{error, info};

use landlord_core::domain::{
    NewRentPayment, PaymentMethod, PaymentStatus, RentPayment, RentPaymentSummary,
    RentPaymentUpdate, YearMonth,
};
use landlord_core::error::DomainError;
use landlord_core::repositories::RentPaymentRepository;
use landlord_shared::{property_display_name, EntityId};

use super::{db_error, decode, delete_error, is_unique_violation, write_error};

pub struct SqliteRentPaymentRepository {
    pool: SqlitePool,
}

impl SqliteRentPaymentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RentPaymentRow {
    id: i64,
    lease_id: i64,
    tenant_id: i64,
    property_id: i64,
    month: String,
    due_date: NaiveDate,
    amount_due: f64,
    amount_paid: f64,
    status: String,
    payment_date: Option<NaiveDate>,
    payment_method: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<RentPaymentRow> for RentPayment {
    type Error = DomainError;

    fn try_from(row: RentPaymentRow) -> Result<Self, Self::Error> {
        Ok(RentPayment {
            id: row.id,
            lease_id: row.lease_id,
            tenant_id: row.tenant_id,
            property_id: row.property_id,
            month: YearMonth::parse(&row.month)?,
            due_date: row.due_date,
            amount_due: row.amount_due,
            amount_paid: row.amount_paid,
            status: decode("status", &row.status, PaymentStatus::from_str)?,
            payment_date: row.payment_date,
            payment_method: row
                .payment_method
                .as_deref()
                .map(|m| decode("payment_method", m, PaymentMethod::from_str))
                .transpose()?,
            notes: row.notes,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct RentPaymentSummaryRow {
    id: i64,
    lease_id: i64,
    tenant_name: String,
    property_id: i64,
    property_name: Option<String>,
    month: String,
    due_date: NaiveDate,
    amount_due: f64,
    amount_paid: f64,
    status: String,
    payment_date: Option<NaiveDate>,
}

impl TryFrom<RentPaymentSummaryRow> for RentPaymentSummary {
    type Error = DomainError;

    fn try_from(row: RentPaymentSummaryRow) -> Result<Self, Self::Error> {
        Ok(RentPaymentSummary {
            id: row.id,
            lease_id: row.lease_id,
            tenant_name: row.tenant_name,
            property_name: property_display_name(row.property_id, row.property_name.as_deref()),
            month: YearMonth::parse(&row.month)?,
            due_date: row.due_date,
            amount_due: row.amount_due,
            amount_paid: row.amount_paid,
            status: decode("status", &row.status, PaymentStatus::from_str)?,
            payment_date: row.payment_date,
        })
    }
}

const COLUMNS: &str = "id, lease_id, tenant_id, property_id, month, due_date, amount_due, \
                       amount_paid, status, payment_date, payment_method, notes, created_at";

#[async_trait]
impl RentPaymentRepository for SqliteRentPaymentRepository {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<RentPayment>, DomainError> {
        let row: Option<RentPaymentRow> =
            sqlx::query_as(&format!("SELECT {} FROM rent_payments WHERE id = ?1", COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("finding rent payment by id", e))?;

        row.map(RentPayment::try_from).transpose()
    }

    async fn list(&self, status: Option<PaymentStatus>) -> Result<Vec<RentPaymentSummary>, DomainError> {
        let rows: Vec<RentPaymentSummaryRow> = sqlx::query_as(
            r#"
            SELECT
                rp.id, rp.lease_id, t.name AS tenant_name,
                p.id AS property_id, p.name AS property_name,
                rp.month, rp.due_date, rp.amount_due, rp.amount_paid, rp.status, rp.payment_date
            FROM rent_payments rp
            JOIN tenants t ON t.id = rp.tenant_id
            JOIN properties p ON p.id = rp.property_id
            WHERE (?1 IS NULL OR rp.status = ?1)
            ORDER BY rp.due_date DESC, rp.id DESC
            "#,
        )
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing rent payments", e))?;

        rows.into_iter().map(RentPaymentSummary::try_from).collect()
    }

    async fn list_by_lease(&self, lease_id: EntityId) -> Result<Vec<RentPayment>, DomainError> {
        let rows: Vec<RentPaymentRow> = sqlx::query_as(&format!(
            "SELECT {} FROM rent_payments WHERE lease_id = ?1 ORDER BY due_date DESC, id DESC",
            COLUMNS
        ))
        .bind(lease_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing rent payments by lease", e))?;

        rows.into_iter().map(RentPayment::try_from).collect()
    }

    async fn exists_for_month(&self, lease_id: EntityId, month: YearMonth) -> Result<bool, DomainError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM rent_payments WHERE lease_id = ?1 AND month = ?2)",
        )
        .bind(lease_id)
        .bind(month.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("checking rent payment for month", e))?;

        Ok(exists)
    }

    async fn create(&self, payment: &NewRentPayment) -> Result<RentPayment, DomainError> {
        let row: RentPaymentRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO rent_payments (
                lease_id, tenant_id, property_id, month, due_date,
                amount_due, amount_paid, status, payment_date, payment_method, notes
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(payment.lease_id)
        .bind(payment.tenant_id)
        .bind(payment.property_id)
        .bind(payment.month.to_string())
        .bind(payment.due_date)
        .bind(payment.amount_due)
        .bind(payment.amount_paid)
        .bind(payment.status.as_str())
        .bind(payment.payment_date)
        .bind(payment.payment_method.map(|m| m.as_str()))
        .bind(&payment.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                error!(
                    "Rent payment for lease {} in {} already exists",
                    payment.lease_id, payment.month
                );
                DomainError::DuplicateRentPayment {
                    lease_id: payment.lease_id,
                    month: payment.month.to_string(),
                }
            } else {
                write_error("creating rent payment", e)
            }
        })?;

        info!("Rent payment created successfully: {}", row.id);
        row.try_into()
    }

    async fn update(&self, id: EntityId, payment: &RentPaymentUpdate) -> Result<RentPayment, DomainError> {
        let row: Option<RentPaymentRow> = sqlx::query_as(&format!(
            r#"
            UPDATE rent_payments
            SET
                month = ?2,
                due_date = ?3,
                amount_due = ?4,
                amount_paid = ?5,
                status = ?6,
                payment_date = ?7,
                payment_method = ?8,
                notes = ?9
            WHERE id = ?1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(id)
        .bind(payment.month.to_string())
        .bind(payment.due_date)
        .bind(payment.amount_due)
        .bind(payment.amount_paid)
        .bind(payment.status.as_str())
        .bind(payment.payment_date)
        .bind(payment.payment_method.map(|m| m.as_str()))
        .bind(&payment.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::ValidationError(format!(
                    "another rent payment of the same lease already covers {}",
                    payment.month
                ))
            } else {
                db_error("updating rent payment", e)
            }
        })?;

        row.ok_or(DomainError::not_found("Rent payment", id))?.try_into()
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM rent_payments WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| delete_error("Rent payment", id, e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Rent payment", id));
        }
        Ok(())
    }

    async fn mark_overdue(&self, as_of: NaiveDate) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE rent_payments
            SET status = 'Overdue'
            WHERE status IN ('Pending', 'Partial') AND due_date < ?1
            "#,
        )
        .bind(as_of)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("marking overdue rent payments", e))?;

        Ok(result.rows_affected())
    }
}
