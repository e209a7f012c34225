// ============================================================================
// Landlord Infrastructure - SQLite Maintenance Request Repository
// File: crates/landlord-infrastructure/src/database/sqlite/maintenance_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use tracing::info;

use landlord_core::domain::{
    MaintenanceRequest, MaintenanceStatus, MaintenanceSummary, NewMaintenanceRequest,
};
use landlord_core::error::DomainError;
use landlord_core::repositories::MaintenanceRepository;
use landlord_shared::{property_display_name, EntityId};

use super::{db_error, decode, delete_error, write_error};

pub struct SqliteMaintenanceRepository {
    pool: SqlitePool,
}

impl SqliteMaintenanceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MaintenanceRow {
    id: i64,
    property_id: i64,
    tenant_id: Option<i64>,
    request_date: NaiveDate,
    description: String,
    status: String,
    cost_estimate: Option<f64>,
    actual_cost: Option<f64>,
    completed_date: Option<NaiveDate>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<MaintenanceRow> for MaintenanceRequest {
    type Error = DomainError;

    fn try_from(row: MaintenanceRow) -> Result<Self, Self::Error> {
        Ok(MaintenanceRequest {
            id: row.id,
            property_id: row.property_id,
            tenant_id: row.tenant_id,
            request_date: row.request_date,
            description: row.description,
            status: decode("status", &row.status, MaintenanceStatus::from_str)?,
            cost_estimate: row.cost_estimate,
            actual_cost: row.actual_cost,
            completed_date: row.completed_date,
            notes: row.notes,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct MaintenanceSummaryRow {
    id: i64,
    property_id: i64,
    property_name: Option<String>,
    tenant_name: Option<String>,
    request_date: NaiveDate,
    description: String,
    status: String,
    cost_estimate: Option<f64>,
    actual_cost: Option<f64>,
}

impl TryFrom<MaintenanceSummaryRow> for MaintenanceSummary {
    type Error = DomainError;

    fn try_from(row: MaintenanceSummaryRow) -> Result<Self, Self::Error> {
        Ok(MaintenanceSummary {
            id: row.id,
            property_name: property_display_name(row.property_id, row.property_name.as_deref()),
            tenant_name: row.tenant_name,
            request_date: row.request_date,
            description: row.description,
            status: decode("status", &row.status, MaintenanceStatus::from_str)?,
            cost_estimate: row.cost_estimate,
            actual_cost: row.actual_cost,
        })
    }
}

const COLUMNS: &str = "id, property_id, tenant_id, request_date, description, status, \
                       cost_estimate, actual_cost, completed_date, notes, created_at";

#[async_trait]
impl MaintenanceRepository for SqliteMaintenanceRepository {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<MaintenanceRequest>, DomainError> {
        let row: Option<MaintenanceRow> =
            sqlx::query_as(&format!("SELECT {} FROM maintenance_requests WHERE id = ?1", COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("finding maintenance request by id", e))?;

        row.map(MaintenanceRequest::try_from).transpose()
    }

    async fn list(&self, status: Option<MaintenanceStatus>) -> Result<Vec<MaintenanceSummary>, DomainError> {
        let rows: Vec<MaintenanceSummaryRow> = sqlx::query_as(
            r#"
            SELECT
                m.id, p.id AS property_id, p.name AS property_name, t.name AS tenant_name,
                m.request_date, m.description, m.status, m.cost_estimate, m.actual_cost
            FROM maintenance_requests m
            JOIN properties p ON p.id = m.property_id
            LEFT JOIN tenants t ON t.id = m.tenant_id
            WHERE (?1 IS NULL OR m.status = ?1)
            ORDER BY m.request_date DESC, m.id DESC
            "#,
        )
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing maintenance requests", e))?;

        rows.into_iter().map(MaintenanceSummary::try_from).collect()
    }

    async fn create(&self, request: &NewMaintenanceRequest) -> Result<MaintenanceRequest, DomainError> {
        let row: MaintenanceRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO maintenance_requests (
                property_id, tenant_id, request_date, description, status,
                cost_estimate, actual_cost, completed_date, notes
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(request.property_id)
        .bind(request.tenant_id)
        .bind(request.request_date)
        .bind(&request.description)
        .bind(request.status.as_str())
        .bind(request.cost_estimate)
        .bind(request.actual_cost)
        .bind(request.completed_date)
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("creating maintenance request", e))?;

        info!("Maintenance request created successfully: {}", row.id);
        row.try_into()
    }

    async fn update(&self, id: EntityId, request: &NewMaintenanceRequest) -> Result<MaintenanceRequest, DomainError> {
        let row: Option<MaintenanceRow> = sqlx::query_as(&format!(
            r#"
            UPDATE maintenance_requests
            SET
                property_id = ?2,
                tenant_id = ?3,
                request_date = ?4,
                description = ?5,
                status = ?6,
                cost_estimate = ?7,
                actual_cost = ?8,
                completed_date = ?9,
                notes = ?10
            WHERE id = ?1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(id)
        .bind(request.property_id)
        .bind(request.tenant_id)
        .bind(request.request_date)
        .bind(&request.description)
        .bind(request.status.as_str())
        .bind(request.cost_estimate)
        .bind(request.actual_cost)
        .bind(request.completed_date)
        .bind(&request.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error("updating maintenance request", e))?;

        row.ok_or(DomainError::not_found("Maintenance request", id))?.try_into()
    }

    async fn update_status(
        &self,
        id: EntityId,
        status: MaintenanceStatus,
        actual_cost: Option<f64>,
        completed_date: Option<NaiveDate>,
    ) -> Result<MaintenanceRequest, DomainError> {
        let row: Option<MaintenanceRow> = sqlx::query_as(&format!(
            r#"
            UPDATE maintenance_requests
            SET status = ?2, actual_cost = ?3, completed_date = ?4
            WHERE id = ?1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(id)
        .bind(status.as_str())
        .bind(actual_cost)
        .bind(completed_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("updating maintenance status", e))?;

        row.ok_or(DomainError::not_found("Maintenance request", id))?.try_into()
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM maintenance_requests WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| delete_error("Maintenance request", id, e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Maintenance request", id));
        }
        Ok(())
    }
}
