// ============================================================================
// Landlord Infrastructure - SQLite Tenant Repository
// File: crates/landlord-infrastructure/src/database/sqlite/tenant_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use tracing::info;

use landlord_core::domain::{NewTenant, Tenant, TenantSummary};
use landlord_core::error::DomainError;
use landlord_core::repositories::TenantRepository;
use landlord_shared::{property_display_name, EntityId};

use super::{db_error, delete_error, write_error};

pub struct SqliteTenantRepository {
    pool: SqlitePool,
}

impl SqliteTenantRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TenantRow {
    id: i64,
    name: String,
    property_id: Option<i64>,
    phone: Option<String>,
    email: Option<String>,
    national_id: Option<String>,
    emergency_contact: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<TenantRow> for Tenant {
    fn from(row: TenantRow) -> Self {
        Tenant {
            id: row.id,
            name: row.name,
            property_id: row.property_id,
            phone: row.phone,
            email: row.email,
            national_id: row.national_id,
            emergency_contact: row.emergency_contact,
            notes: row.notes,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct TenantSummaryRow {
    id: i64,
    name: String,
    property_id: Option<i64>,
    property_name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<TenantSummaryRow> for TenantSummary {
    fn from(row: TenantSummaryRow) -> Self {
        TenantSummary {
            id: row.id,
            name: row.name,
            property_name: row
                .property_id
                .map(|id| property_display_name(id, row.property_name.as_deref())),
            phone: row.phone,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

const COLUMNS: &str =
    "id, name, property_id, phone, email, national_id, emergency_contact, notes, created_at";

#[async_trait]
impl TenantRepository for SqliteTenantRepository {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Tenant>, DomainError> {
        let row: Option<TenantRow> =
            sqlx::query_as(&format!("SELECT {} FROM tenants WHERE id = ?1", COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("finding tenant by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn list(&self, property_id: Option<EntityId>) -> Result<Vec<TenantSummary>, DomainError> {
        let rows: Vec<TenantSummaryRow> = sqlx::query_as(
            r#"
            SELECT
                t.id, t.name, p.id AS property_id, p.name AS property_name,
                t.phone, t.email, t.created_at
            FROM tenants t
            LEFT JOIN properties p ON p.id = t.property_id
            WHERE (?1 IS NULL OR t.property_id = ?1)
            ORDER BY t.created_at DESC, t.id DESC
            "#,
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing tenants", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, tenant: &NewTenant) -> Result<Tenant, DomainError> {
        let row: TenantRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO tenants (name, property_id, phone, email, national_id, emergency_contact, notes)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(&tenant.name)
        .bind(tenant.property_id)
        .bind(&tenant.phone)
        .bind(&tenant.email)
        .bind(&tenant.national_id)
        .bind(&tenant.emergency_contact)
        .bind(&tenant.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("creating tenant", e))?;

        info!("Tenant created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, id: EntityId, tenant: &NewTenant) -> Result<Tenant, DomainError> {
        let row: Option<TenantRow> = sqlx::query_as(&format!(
            r#"
            UPDATE tenants
            SET
                name = ?2,
                property_id = ?3,
                phone = ?4,
                email = ?5,
                national_id = ?6,
                emergency_contact = ?7,
                notes = ?8
            WHERE id = ?1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(id)
        .bind(&tenant.name)
        .bind(tenant.property_id)
        .bind(&tenant.phone)
        .bind(&tenant.email)
        .bind(&tenant.national_id)
        .bind(&tenant.emergency_contact)
        .bind(&tenant.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error("updating tenant", e))?;

        row.map(Into::into).ok_or(DomainError::not_found("Tenant", id))
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM tenants WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| delete_error("Tenant", id, e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Tenant", id));
        }
        Ok(())
    }
}
