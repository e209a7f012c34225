// ============================================================================
// Landlord Infrastructure - SQLite Report Queries
// File: crates/landlord-infrastructure/src/database/sqlite/report_repo_impl.rs
// ============================================================================
//! Read-only aggregations behind the dashboard and reports.
//!
//! Sums are wrapped in `COALESCE(..., 0.0)` so empty tables still decode as `f64`.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, SqlitePool};

use landlord_core::domain::{
    DashboardCounts, GroupTotal, LeaseExpiry, MaintenanceStatus, OccupancyRow, OverdueRent,
    PaymentStatus, RecentMaintenance, RecentPayment,
};
use landlord_core::error::DomainError;
use landlord_core::repositories::ReportRepository;
use landlord_shared::property_display_name;

use super::{db_error, decode};

pub struct SqliteReportRepository {
    pool: SqlitePool,
}

impl SqliteReportRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn group_totals(&self, context: &str, sql: &str) -> Result<Vec<GroupTotal>, DomainError> {
        let rows: Vec<GroupTotalRow> = sqlx::query_as(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error(context, e))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn group_totals_since(
        &self,
        context: &str,
        sql: &str,
        since: NaiveDate,
    ) -> Result<Vec<GroupTotal>, DomainError> {
        let rows: Vec<GroupTotalRow> = sqlx::query_as(sql)
            .bind(since)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error(context, e))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn total(&self, context: &str, sql: &str) -> Result<f64, DomainError> {
        sqlx::query_scalar::<_, f64>(sql)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error(context, e))
    }

    async fn lease_expiries(
        &self,
        context: &str,
        sql: &str,
        dates: &[NaiveDate],
    ) -> Result<Vec<LeaseExpiry>, DomainError> {
        let mut query = sqlx::query_as::<_, LeaseExpiryRow>(sql);
        for date in dates {
            query = query.bind(*date);
        }
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error(context, e))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, FromRow)]
struct DashboardCountsRow {
    total_properties: i64,
    occupied_properties: i64,
    total_tenants: i64,
    open_maintenance: i64,
    total_income: f64,
    total_expenses: f64,
    overdue_payments: i64,
}

#[derive(Debug, FromRow)]
struct RecentPaymentRow {
    tenant_name: String,
    amount_paid: f64,
    payment_date: Option<NaiveDate>,
    status: String,
}

#[derive(Debug, FromRow)]
struct RecentMaintenanceRow {
    description: String,
    status: String,
    request_date: NaiveDate,
}

#[derive(Debug, FromRow)]
struct OccupancyDbRow {
    property_id: i64,
    property_name: Option<String>,
    status: String,
    active_leases: i64,
    current_tenant: Option<String>,
}

#[derive(Debug, FromRow)]
struct GroupTotalRow {
    key: String,
    total: f64,
    count: i64,
}

impl From<GroupTotalRow> for GroupTotal {
    fn from(row: GroupTotalRow) -> Self {
        GroupTotal {
            key: row.key,
            total: row.total,
            count: row.count,
        }
    }
}

#[derive(Debug, FromRow)]
struct OverdueRentRow {
    payment_id: i64,
    tenant_name: String,
    property_id: i64,
    property_name: Option<String>,
    month: String,
    due_date: NaiveDate,
    amount_due: f64,
    amount_paid: f64,
}

#[derive(Debug, FromRow)]
struct LeaseExpiryRow {
    lease_id: i64,
    tenant_name: String,
    property_id: i64,
    property_name: Option<String>,
    end_date: NaiveDate,
    rent_amount: f64,
    status: String,
}

impl From<LeaseExpiryRow> for LeaseExpiry {
    fn from(row: LeaseExpiryRow) -> Self {
        LeaseExpiry {
            lease_id: row.lease_id,
            tenant_name: row.tenant_name,
            property_name: property_display_name(row.property_id, row.property_name.as_deref()),
            end_date: row.end_date,
            rent_amount: row.rent_amount,
            status: row.status,
        }
    }
}

#[async_trait]
impl ReportRepository for SqliteReportRepository {
    async fn dashboard_counts(&self) -> Result<DashboardCounts, DomainError> {
        let row: DashboardCountsRow = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM properties) AS total_properties,
                (SELECT COUNT(*) FROM properties WHERE status = 'Occupied') AS occupied_properties,
                (SELECT COUNT(*) FROM tenants) AS total_tenants,
                (SELECT COUNT(*) FROM maintenance_requests WHERE status = 'Open') AS open_maintenance,
                (SELECT COALESCE(SUM(amount_paid), 0.0) FROM rent_payments WHERE status = 'Paid') AS total_income,
                (SELECT COALESCE(SUM(amount), 0.0) FROM expenses) AS total_expenses,
                (SELECT COUNT(*) FROM rent_payments WHERE status = 'Overdue') AS overdue_payments
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("loading dashboard counts", e))?;

        Ok(DashboardCounts {
            total_properties: row.total_properties,
            occupied_properties: row.occupied_properties,
            total_tenants: row.total_tenants,
            open_maintenance: row.open_maintenance,
            total_income: row.total_income,
            total_expenses: row.total_expenses,
            overdue_payments: row.overdue_payments,
        })
    }

    async fn recent_payments(&self, limit: i64) -> Result<Vec<RecentPayment>, DomainError> {
        let rows: Vec<RecentPaymentRow> = sqlx::query_as(
            r#"
            SELECT t.name AS tenant_name, rp.amount_paid, rp.payment_date, rp.status
            FROM rent_payments rp
            JOIN tenants t ON t.id = rp.tenant_id
            WHERE rp.payment_date IS NOT NULL
            ORDER BY rp.payment_date DESC, rp.id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("loading recent payments", e))?;

        rows.into_iter()
            .map(|r| {
                Ok(RecentPayment {
                    tenant_name: r.tenant_name,
                    amount_paid: r.amount_paid,
                    payment_date: r.payment_date,
                    status: decode("status", &r.status, PaymentStatus::from_str)?,
                })
            })
            .collect()
    }

    async fn recent_maintenance(&self, limit: i64) -> Result<Vec<RecentMaintenance>, DomainError> {
        let rows: Vec<RecentMaintenanceRow> = sqlx::query_as(
            r#"
            SELECT description, status, request_date
            FROM maintenance_requests
            ORDER BY request_date DESC, id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("loading recent maintenance", e))?;

        rows.into_iter()
            .map(|r| {
                Ok(RecentMaintenance {
                    description: r.description,
                    status: decode("status", &r.status, MaintenanceStatus::from_str)?,
                    request_date: r.request_date,
                })
            })
            .collect()
    }

    async fn occupancy(&self) -> Result<Vec<OccupancyRow>, DomainError> {
        let rows: Vec<OccupancyDbRow> = sqlx::query_as(
            r#"
            SELECT
                p.id AS property_id,
                p.name AS property_name,
                p.status,
                COUNT(l.id) AS active_leases,
                (
                    SELECT t.name
                    FROM leases cl
                    JOIN tenants t ON t.id = cl.tenant_id
                    WHERE cl.property_id = p.id AND cl.status = 'Active'
                    ORDER BY cl.start_date DESC
                    LIMIT 1
                ) AS current_tenant
            FROM properties p
            LEFT JOIN leases l ON l.property_id = p.id AND l.status = 'Active'
            GROUP BY p.id, p.name, p.status
            ORDER BY p.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("loading occupancy", e))?;

        Ok(rows
            .into_iter()
            .map(|r| OccupancyRow {
                property_id: r.property_id,
                property_name: property_display_name(r.property_id, r.property_name.as_deref()),
                status: r.status,
                active_leases: r.active_leases,
                current_tenant: r.current_tenant,
            })
            .collect())
    }

    async fn paid_income_by_month(&self, since: NaiveDate) -> Result<Vec<GroupTotal>, DomainError> {
        self.group_totals_since(
            "loading income by month",
            r#"
            SELECT month AS key, COALESCE(SUM(amount_paid), 0.0) AS total, COUNT(*) AS count
            FROM rent_payments
            WHERE status = 'Paid' AND payment_date >= ?1
            GROUP BY month
            ORDER BY month
            "#,
            since,
        )
        .await
    }

    /// Amount due and row count per payment status.
    async fn payment_status_summary(&self) -> Result<Vec<GroupTotal>, DomainError> {
        self.group_totals(
            "loading payment status summary",
            r#"
            SELECT status AS key, COALESCE(SUM(amount_paid), 0.0) AS total, COUNT(*) AS count
            FROM rent_payments
            GROUP BY status
            ORDER BY status
            "#,
        )
        .await
    }

    async fn total_paid_income(&self) -> Result<f64, DomainError> {
        self.total(
            "loading total income",
            "SELECT COALESCE(SUM(amount_paid), 0.0) FROM rent_payments WHERE status = 'Paid'",
        )
        .await
    }

    async fn outstanding_rent(&self) -> Result<f64, DomainError> {
        self.total(
            "loading outstanding rent",
            r#"
            SELECT COALESCE(SUM(amount_due - amount_paid), 0.0)
            FROM rent_payments
            WHERE status != 'Paid' AND amount_due > amount_paid
            "#,
        )
        .await
    }

    async fn expenses_by_category(&self) -> Result<Vec<GroupTotal>, DomainError> {
        self.group_totals(
            "loading expenses by category",
            r#"
            SELECT category AS key, COALESCE(SUM(amount), 0.0) AS total, COUNT(*) AS count
            FROM expenses
            GROUP BY category
            ORDER BY total DESC
            "#,
        )
        .await
    }

    async fn expenses_by_property(&self) -> Result<Vec<GroupTotal>, DomainError> {
        self.group_totals(
            "loading expenses by property",
            r#"
            SELECT
                COALESCE(p.name, 'Property #' || p.id) AS key,
                COALESCE(SUM(e.amount), 0.0) AS total,
                COUNT(*) AS count
            FROM expenses e
            JOIN properties p ON p.id = e.property_id
            GROUP BY p.id, p.name
            ORDER BY total DESC
            "#,
        )
        .await
    }

    async fn expenses_by_month(&self, since: NaiveDate) -> Result<Vec<GroupTotal>, DomainError> {
        self.group_totals_since(
            "loading expenses by month",
            r#"
            SELECT strftime('%Y-%m', date) AS key, COALESCE(SUM(amount), 0.0) AS total, COUNT(*) AS count
            FROM expenses
            WHERE date >= ?1
            GROUP BY key
            ORDER BY key
            "#,
            since,
        )
        .await
    }

    async fn total_expenses(&self) -> Result<f64, DomainError> {
        self.total(
            "loading total expenses",
            "SELECT COALESCE(SUM(amount), 0.0) FROM expenses",
        )
        .await
    }

    async fn overdue_rent(&self, as_of: NaiveDate) -> Result<Vec<OverdueRent>, DomainError> {
        let rows: Vec<OverdueRentRow> = sqlx::query_as(
            r#"
            SELECT
                rp.id AS payment_id, t.name AS tenant_name,
                p.id AS property_id, p.name AS property_name,
                rp.month, rp.due_date, rp.amount_due, rp.amount_paid
            FROM rent_payments rp
            JOIN tenants t ON t.id = rp.tenant_id
            JOIN properties p ON p.id = rp.property_id
            WHERE rp.status = 'Overdue'
               OR (rp.amount_due > rp.amount_paid AND rp.due_date < ?1)
            ORDER BY rp.due_date, rp.id
            "#,
        )
        .bind(as_of)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("loading overdue rent", e))?;

        Ok(rows
            .into_iter()
            .map(|r| OverdueRent {
                payment_id: r.payment_id,
                tenant_name: r.tenant_name,
                property_name: property_display_name(r.property_id, r.property_name.as_deref()),
                month: r.month,
                due_date: r.due_date,
                amount_due: r.amount_due,
                amount_paid: r.amount_paid,
            })
            .collect())
    }

    async fn leases_expiring(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<LeaseExpiry>, DomainError> {
        self.lease_expiries(
            "loading expiring leases",
            r#"
            SELECT
                l.id AS lease_id, t.name AS tenant_name,
                p.id AS property_id, p.name AS property_name,
                l.end_date, l.rent_amount, l.status
            FROM leases l
            JOIN tenants t ON t.id = l.tenant_id
            JOIN properties p ON p.id = l.property_id
            WHERE l.status = 'Active' AND l.end_date BETWEEN ?1 AND ?2
            ORDER BY l.end_date, l.id
            "#,
            &[from, to],
        )
        .await
    }

    async fn leases_ended(&self, as_of: NaiveDate) -> Result<Vec<LeaseExpiry>, DomainError> {
        self.lease_expiries(
            "loading ended leases",
            r#"
            SELECT
                l.id AS lease_id, t.name AS tenant_name,
                p.id AS property_id, p.name AS property_name,
                l.end_date, l.rent_amount, l.status
            FROM leases l
            JOIN tenants t ON t.id = l.tenant_id
            JOIN properties p ON p.id = l.property_id
            WHERE l.status IN ('Active', 'Expired') AND l.end_date < ?1
            ORDER BY l.end_date DESC, l.id
            "#,
            &[as_of],
        )
        .await
    }

    async fn maintenance_cost_by_property(&self) -> Result<Vec<GroupTotal>, DomainError> {
        self.group_totals(
            "loading maintenance cost by property",
            r#"
            SELECT
                COALESCE(p.name, 'Property #' || p.id) AS key,
                COALESCE(SUM(COALESCE(m.actual_cost, m.cost_estimate, 0.0)), 0.0) AS total,
                COUNT(*) AS count
            FROM maintenance_requests m
            JOIN properties p ON p.id = m.property_id
            GROUP BY p.id, p.name
            ORDER BY total DESC
            "#,
        )
        .await
    }

    async fn maintenance_cost_by_status(&self) -> Result<Vec<GroupTotal>, DomainError> {
        self.group_totals(
            "loading maintenance cost by status",
            r#"
            SELECT
                status AS key,
                COALESCE(SUM(COALESCE(actual_cost, cost_estimate, 0.0)), 0.0) AS total,
                COUNT(*) AS count
            FROM maintenance_requests
            GROUP BY status
            ORDER BY status
            "#,
        )
        .await
    }
}
