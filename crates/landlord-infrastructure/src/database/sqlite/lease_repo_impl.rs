// ============================================================================
// Landlord Infrastructure - SQLite Lease Repository
// File: crates/landlord-infrastructure/src/database/sqlite/lease_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use tracing::info;

use landlord_core::domain::{Lease, LeaseStatus, LeaseSummary, NewLease};
use landlord_core::error::DomainError;
use landlord_core::repositories::LeaseRepository;
use landlord_shared::{property_display_name, EntityId};

use super::{db_error, decode, write_error};

pub struct SqliteLeaseRepository {
    pool: SqlitePool,
}

impl SqliteLeaseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct LeaseRow {
    id: i64,
    tenant_id: i64,
    property_id: i64,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    rent_amount: f64,
    deposit_amount: f64,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<LeaseRow> for Lease {
    type Error = DomainError;

    fn try_from(row: LeaseRow) -> Result<Self, Self::Error> {
        Ok(Lease {
            id: row.id,
            tenant_id: row.tenant_id,
            property_id: row.property_id,
            start_date: row.start_date,
            end_date: row.end_date,
            rent_amount: row.rent_amount,
            deposit_amount: row.deposit_amount,
            status: decode("status", &row.status, LeaseStatus::from_str)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct LeaseSummaryRow {
    id: i64,
    tenant_name: String,
    property_id: i64,
    property_name: Option<String>,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    rent_amount: f64,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<LeaseSummaryRow> for LeaseSummary {
    type Error = DomainError;

    fn try_from(row: LeaseSummaryRow) -> Result<Self, Self::Error> {
        Ok(LeaseSummary {
            id: row.id,
            tenant_name: row.tenant_name,
            property_name: property_display_name(row.property_id, row.property_name.as_deref()),
            start_date: row.start_date,
            end_date: row.end_date,
            rent_amount: row.rent_amount,
            status: decode("status", &row.status, LeaseStatus::from_str)?,
            created_at: row.created_at,
        })
    }
}

const COLUMNS: &str = "id, tenant_id, property_id, start_date, end_date, rent_amount, \
                       deposit_amount, status, created_at";

#[async_trait]
impl LeaseRepository for SqliteLeaseRepository {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Lease>, DomainError> {
        let row: Option<LeaseRow> =
            sqlx::query_as(&format!("SELECT {} FROM leases WHERE id = ?1", COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("finding lease by id", e))?;

        row.map(Lease::try_from).transpose()
    }

    async fn list(&self, status: Option<LeaseStatus>) -> Result<Vec<LeaseSummary>, DomainError> {
        let rows: Vec<LeaseSummaryRow> = sqlx::query_as(
            r#"
            SELECT
                l.id, t.name AS tenant_name, p.id AS property_id, p.name AS property_name,
                l.start_date, l.end_date, l.rent_amount, l.status, l.created_at
            FROM leases l
            JOIN tenants t ON t.id = l.tenant_id
            JOIN properties p ON p.id = l.property_id
            WHERE (?1 IS NULL OR l.status = ?1)
            ORDER BY l.created_at DESC, l.id DESC
            "#,
        )
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing leases", e))?;

        rows.into_iter().map(LeaseSummary::try_from).collect()
    }

    async fn list_active(&self, as_of: NaiveDate) -> Result<Vec<Lease>, DomainError> {
        let rows: Vec<LeaseRow> = sqlx::query_as(&format!(
            "SELECT {} FROM leases WHERE status = 'Active' AND start_date <= ?1 ORDER BY id",
            COLUMNS
        ))
        .bind(as_of)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing active leases", e))?;

        rows.into_iter().map(Lease::try_from).collect()
    }

    async fn create(&self, lease: &NewLease) -> Result<Lease, DomainError> {
        let row: LeaseRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO leases (tenant_id, property_id, start_date, end_date, rent_amount, deposit_amount, status)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(lease.tenant_id)
        .bind(lease.property_id)
        .bind(lease.start_date)
        .bind(lease.end_date)
        .bind(lease.rent_amount)
        .bind(lease.deposit_amount)
        .bind(lease.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("creating lease", e))?;

        info!("Lease created successfully: {}", row.id);
        row.try_into()
    }

    async fn update(&self, id: EntityId, lease: &NewLease) -> Result<Lease, DomainError> {
        let row: Option<LeaseRow> = sqlx::query_as(&format!(
            r#"
            UPDATE leases
            SET
                tenant_id = ?2,
                property_id = ?3,
                start_date = ?4,
                end_date = ?5,
                rent_amount = ?6,
                deposit_amount = ?7,
                status = ?8
            WHERE id = ?1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(id)
        .bind(lease.tenant_id)
        .bind(lease.property_id)
        .bind(lease.start_date)
        .bind(lease.end_date)
        .bind(lease.rent_amount)
        .bind(lease.deposit_amount)
        .bind(lease.status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error("updating lease", e))?;

        row.ok_or(DomainError::not_found("Lease", id))?.try_into()
    }

    async fn set_status(&self, id: EntityId, status: LeaseStatus) -> Result<Lease, DomainError> {
        let row: Option<LeaseRow> = sqlx::query_as(&format!(
            "UPDATE leases SET status = ?2 WHERE id = ?1 RETURNING {}",
            COLUMNS
        ))
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("updating lease status", e))?;

        row.ok_or(DomainError::not_found("Lease", id))?.try_into()
    }

    async fn expire_ended(&self, as_of: NaiveDate) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE leases
            SET status = 'Expired'
            WHERE status = 'Active' AND end_date IS NOT NULL AND end_date < ?1
            "#,
        )
        .bind(as_of)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("expiring leases", e))?;

        Ok(result.rows_affected())
    }
}
