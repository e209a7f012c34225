// ============================================================================
// Landlord Core - Report Service
// File: crates/landlord-core/src/services/report_service.rs
// ============================================================================
//! Dashboard and read-only reports.

use std::sync::Arc;
use chrono::{Months, NaiveDate};
use landlord_shared::constants::{
    DASHBOARD_RECENT_LIMIT, LEASE_EXPIRY_WINDOW_MONTHS, REPORT_TREND_MONTHS,
};
use tracing::debug;

use crate::domain::{
    Dashboard, ExpenseReport, FinancialSummary, IncomeReport, LeaseExpirations, MaintenanceCosts,
    OccupancyRow, OverdueRent,
};
use crate::error::DomainError;
use crate::repositories::ReportRepository;

pub struct ReportService {
    reports: Arc<dyn ReportRepository>,
}

impl ReportService {
    pub fn new(reports: Arc<dyn ReportRepository>) -> Self {
        Self { reports }
    }

    pub async fn dashboard(&self) -> Result<Dashboard, DomainError> {
        let counts = self.reports.dashboard_counts().await?;
        let recent_payments = self.reports.recent_payments(DASHBOARD_RECENT_LIMIT).await?;
        let recent_maintenance = self.reports.recent_maintenance(DASHBOARD_RECENT_LIMIT).await?;
        Ok(Dashboard {
            counts,
            recent_payments,
            recent_maintenance,
        })
    }

    pub async fn occupancy(&self) -> Result<Vec<OccupancyRow>, DomainError> {
        self.reports.occupancy().await
    }

    /// Paid rent per month over the trend window ending at `today`.
    pub async fn income(&self, today: NaiveDate) -> Result<IncomeReport, DomainError> {
        let since = trend_start(today)?;
        debug!("Income report since {}", since);
        Ok(IncomeReport {
            by_month: self.reports.paid_income_by_month(since).await?,
            by_status: self.reports.payment_status_summary().await?,
        })
    }

    pub async fn expenses(&self, today: NaiveDate) -> Result<ExpenseReport, DomainError> {
        let since = trend_start(today)?;
        debug!("Expense report since {}", since);
        Ok(ExpenseReport {
            by_category: self.reports.expenses_by_category().await?,
            by_property: self.reports.expenses_by_property().await?,
            by_month: self.reports.expenses_by_month(since).await?,
        })
    }

    /// Rows that are Overdue, or unpaid past their due date as of `as_of`.
    pub async fn overdue_rent(&self, as_of: NaiveDate) -> Result<Vec<OverdueRent>, DomainError> {
        self.reports.overdue_rent(as_of).await
    }

    pub async fn lease_expirations(&self, today: NaiveDate) -> Result<LeaseExpirations, DomainError> {
        let until = today
            .checked_add_months(Months::new(LEASE_EXPIRY_WINDOW_MONTHS))
            .ok_or_else(|| DomainError::InternalError(format!("date out of range: {}", today)))?;
        Ok(LeaseExpirations {
            expiring: self.reports.leases_expiring(today, until).await?,
            ended: self.reports.leases_ended(today).await?,
        })
    }

    pub async fn maintenance_costs(&self) -> Result<MaintenanceCosts, DomainError> {
        Ok(MaintenanceCosts {
            by_property: self.reports.maintenance_cost_by_property().await?,
            by_status: self.reports.maintenance_cost_by_status().await?,
        })
    }

    pub async fn financial_summary(&self, today: NaiveDate) -> Result<FinancialSummary, DomainError> {
        let since = trend_start(today)?;
        Ok(FinancialSummary {
            total_income: self.reports.total_paid_income().await?,
            total_expenses: self.reports.total_expenses().await?,
            outstanding_rent: self.reports.outstanding_rent().await?,
            income_by_month: self.reports.paid_income_by_month(since).await?,
            expenses_by_month: self.reports.expenses_by_month(since).await?,
        })
    }
}

fn trend_start(today: NaiveDate) -> Result<NaiveDate, DomainError> {
    today
        .checked_sub_months(Months::new(REPORT_TREND_MONTHS))
        .ok_or_else(|| DomainError::InternalError(format!("date out of range: {}", today)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DashboardCounts, GroupTotal};
    use crate::repositories::MockReportRepository;
    use mockall::predicate::eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn total(key: &str, total: f64) -> GroupTotal {
        GroupTotal {
            key: key.to_string(),
            total,
            count: 1,
        }
    }

    #[tokio::test]
    async fn test_dashboard_uses_recent_limit() {
        let mut repo = MockReportRepository::new();
        repo.expect_dashboard_counts().returning(|| {
            Ok(DashboardCounts {
                total_properties: 4,
                occupied_properties: 3,
                ..Default::default()
            })
        });
        repo.expect_recent_payments()
            .with(eq(DASHBOARD_RECENT_LIMIT))
            .returning(|_| Ok(vec![]));
        repo.expect_recent_maintenance()
            .with(eq(DASHBOARD_RECENT_LIMIT))
            .returning(|_| Ok(vec![]));

        let dashboard = ReportService::new(Arc::new(repo)).dashboard().await.unwrap();
        assert_eq!(dashboard.counts.occupied_properties, 3);
    }

    #[tokio::test]
    async fn test_expiry_window_is_three_months() {
        let mut repo = MockReportRepository::new();
        repo.expect_leases_expiring()
            .with(eq(date(2024, 11, 30)), eq(date(2025, 2, 28)))
            .times(1)
            .returning(|_, _| Ok(vec![]));
        repo.expect_leases_ended()
            .with(eq(date(2024, 11, 30)))
            .returning(|_| Ok(vec![]));

        ReportService::new(Arc::new(repo))
            .lease_expirations(date(2024, 11, 30))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_financial_summary_net() {
        let mut repo = MockReportRepository::new();
        repo.expect_total_paid_income().returning(|| Ok(3600.0));
        repo.expect_total_expenses().returning(|| Ok(850.0));
        repo.expect_outstanding_rent().returning(|| Ok(1200.0));
        repo.expect_paid_income_by_month()
            .with(eq(date(2023, 6, 15)))
            .returning(|_| Ok(vec![total("2024-05", 1200.0)]));
        repo.expect_expenses_by_month()
            .with(eq(date(2023, 6, 15)))
            .returning(|_| Ok(vec![]));

        let summary = ReportService::new(Arc::new(repo))
            .financial_summary(date(2024, 6, 15))
            .await
            .unwrap();
        assert_eq!(summary.net_income(), 2750.0);
        assert_eq!(summary.outstanding_rent, 1200.0);
        assert_eq!(summary.income_by_month.len(), 1);
    }
}
