//! Read-only aggregation queries (port)

use async_trait::async_trait;
use chrono::NaiveDate;
use crate::domain::{
    DashboardCounts, GroupTotal, LeaseExpiry, OccupancyRow, OverdueRent, RecentMaintenance,
    RecentPayment,
};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn dashboard_counts(&self) -> Result<DashboardCounts, DomainError>;
    async fn recent_payments(&self, limit: i64) -> Result<Vec<RecentPayment>, DomainError>;
    async fn recent_maintenance(&self, limit: i64) -> Result<Vec<RecentMaintenance>, DomainError>;

    async fn occupancy(&self) -> Result<Vec<OccupancyRow>, DomainError>;

    /// Paid rent grouped by `month`, for payments made on or after `since`.
    async fn paid_income_by_month(&self, since: NaiveDate) -> Result<Vec<GroupTotal>, DomainError>;
    async fn payment_status_summary(&self) -> Result<Vec<GroupTotal>, DomainError>;
    async fn total_paid_income(&self) -> Result<f64, DomainError>;
    async fn outstanding_rent(&self) -> Result<f64, DomainError>;

    async fn expenses_by_category(&self) -> Result<Vec<GroupTotal>, DomainError>;
    async fn expenses_by_property(&self) -> Result<Vec<GroupTotal>, DomainError>;
    async fn expenses_by_month(&self, since: NaiveDate) -> Result<Vec<GroupTotal>, DomainError>;
    async fn total_expenses(&self) -> Result<f64, DomainError>;

    async fn overdue_rent(&self, as_of: NaiveDate) -> Result<Vec<OverdueRent>, DomainError>;
    async fn leases_expiring(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<LeaseExpiry>, DomainError>;
    async fn leases_ended(&self, as_of: NaiveDate) -> Result<Vec<LeaseExpiry>, DomainError>;

    async fn maintenance_cost_by_property(&self) -> Result<Vec<GroupTotal>, DomainError>;
    async fn maintenance_cost_by_status(&self) -> Result<Vec<GroupTotal>, DomainError>;
}
