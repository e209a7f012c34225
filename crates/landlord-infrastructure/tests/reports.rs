//! Dashboard and report queries over a small seeded portfolio.

mod common;

use std::sync::Arc;

use common::{add_lease, add_property, add_tenant, date, memory_pool};
use landlord_core::domain::{
    ExpenseCategory, MaintenanceStatus, NewExpense, NewMaintenanceRequest, NewRentPayment, PaidBy,
    PaymentMethod, YearMonth,
};
use landlord_core::repositories::{
    ExpenseRepository, MaintenanceRepository, ReportRepository, RentPaymentRepository,
};
use landlord_core::services::ReportService;
use landlord_infrastructure::{
    SqliteExpenseRepository, SqliteMaintenanceRepository, SqliteRentPaymentRepository,
    SqliteReportRepository,
};
use sqlx::SqlitePool;

/// Two properties, one let to John with Jan paid and Feb unpaid, plus one expense
/// and one maintenance request on each property.
async fn seed(pool: &SqlitePool) {
    let let_out = add_property(pool, Some("Rose Villa")).await;
    let vacant = add_property(pool, None).await;
    sqlx::query("UPDATE properties SET status = 'Vacant' WHERE id = ?1")
        .bind(vacant.id)
        .execute(pool)
        .await
        .unwrap();
    let john = add_tenant(pool, "John Doe", Some(let_out.id)).await;
    let lease = add_lease(
        pool,
        john.id,
        let_out.id,
        date(2024, 1, 1),
        Some(date(2024, 6, 30)),
        1200.0,
    )
    .await;

    let payments = SqliteRentPaymentRepository::new(pool.clone());
    let mut jan = payments
        .create(&NewRentPayment::pending_for(&lease, YearMonth::parse("2024-01").unwrap()).unwrap())
        .await
        .unwrap();
    jan.apply_payment(1200.0, date(2024, 1, 30), Some(PaymentMethod::Cash))
        .unwrap();
    payments.update(jan.id, &jan.to_update()).await.unwrap();
    payments
        .create(&NewRentPayment::pending_for(&lease, YearMonth::parse("2024-02").unwrap()).unwrap())
        .await
        .unwrap();

    let expenses = SqliteExpenseRepository::new(pool.clone());
    for (property_id, category, amount) in [
        (let_out.id, ExpenseCategory::Repair, 250.0),
        (vacant.id, ExpenseCategory::Utility, 50.0),
    ] {
        expenses
            .create(&NewExpense {
                property_id,
                description: "Invoice".to_string(),
                category,
                amount,
                date: date(2024, 2, 10),
                paid_by: PaidBy::Landlord,
                invoice_number: None,
                notes: None,
            })
            .await
            .unwrap();
    }

    let maintenance = SqliteMaintenanceRepository::new(pool.clone());
    for (property_id, status, estimate, actual) in [
        (let_out.id, MaintenanceStatus::Open, Some(100.0), None),
        (vacant.id, MaintenanceStatus::Completed, Some(60.0), Some(75.0)),
    ] {
        maintenance
            .create(&NewMaintenanceRequest {
                property_id,
                tenant_id: None,
                request_date: date(2024, 2, 1),
                description: "Repair".to_string(),
                status,
                cost_estimate: estimate,
                actual_cost: actual,
                completed_date: None,
                notes: None,
            })
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_dashboard() {
    let pool = memory_pool().await;
    seed(&pool).await;
    let svc = ReportService::new(Arc::new(SqliteReportRepository::new(pool.clone())));

    let dashboard = svc.dashboard().await.unwrap();
    let counts = &dashboard.counts;

    assert_eq!(counts.total_properties, 2);
    assert_eq!(counts.occupied_properties, 1);
    assert_eq!(counts.total_tenants, 1);
    assert_eq!(counts.open_maintenance, 1);
    assert_eq!(counts.total_income, 1200.0);
    assert_eq!(counts.total_expenses, 300.0);
    assert_eq!(counts.overdue_payments, 0);
    assert_eq!(dashboard.recent_payments.len(), 1);
    assert_eq!(dashboard.recent_payments[0].tenant_name, "John Doe");
    assert_eq!(dashboard.recent_maintenance.len(), 2);
}

#[tokio::test]
async fn test_dashboard_on_empty_database() {
    let pool = memory_pool().await;
    let repo = SqliteReportRepository::new(pool.clone());

    let counts = repo.dashboard_counts().await.unwrap();

    assert_eq!(counts.total_properties, 0);
    assert_eq!(counts.total_income, 0.0);
    assert_eq!(repo.outstanding_rent().await.unwrap(), 0.0);
}

#[tokio::test]
async fn test_occupancy() {
    let pool = memory_pool().await;
    seed(&pool).await;

    let rows = SqliteReportRepository::new(pool.clone()).occupancy().await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].property_name, "Rose Villa");
    assert_eq!(rows[0].active_leases, 1);
    assert_eq!(rows[0].current_tenant.as_deref(), Some("John Doe"));
    assert_eq!(rows[1].property_name, format!("Property #{}", rows[1].property_id));
    assert_eq!(rows[1].active_leases, 0);
    assert_eq!(rows[1].current_tenant, None);
}

#[tokio::test]
async fn test_overdue_rent_and_outstanding_balance() {
    let pool = memory_pool().await;
    seed(&pool).await;
    let repo = SqliteReportRepository::new(pool.clone());

    // February rent is due 2024-03-01
    assert!(repo.overdue_rent(date(2024, 3, 1)).await.unwrap().is_empty());
    let overdue = repo.overdue_rent(date(2024, 3, 2)).await.unwrap();
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].month, "2024-02");
    assert_eq!(overdue[0].property_name, "Rose Villa");
    assert_eq!(overdue[0].outstanding(), 1200.0);

    assert_eq!(repo.outstanding_rent().await.unwrap(), 1200.0);
}

#[tokio::test]
async fn test_expense_and_maintenance_groupings() {
    let pool = memory_pool().await;
    seed(&pool).await;
    let svc = ReportService::new(Arc::new(SqliteReportRepository::new(pool.clone())));

    let expenses = svc.expenses(date(2024, 6, 1)).await.unwrap();
    assert_eq!(expenses.by_category[0].key, "Repair");
    assert_eq!(expenses.by_category[0].total, 250.0);
    assert_eq!(expenses.by_month.len(), 1);
    assert_eq!(expenses.by_month[0].key, "2024-02");
    assert_eq!(expenses.by_month[0].total, 300.0);

    let costs = svc.maintenance_costs().await.unwrap();
    let by_status: Vec<(&str, f64)> = costs
        .by_status
        .iter()
        .map(|g| (g.key.as_str(), g.total))
        .collect();
    assert_eq!(by_status, vec![("Completed", 75.0), ("Open", 100.0)]);
}

#[tokio::test]
async fn test_income_trend_window() {
    let pool = memory_pool().await;
    seed(&pool).await;
    let svc = ReportService::new(Arc::new(SqliteReportRepository::new(pool.clone())));

    let recent = svc.income(date(2024, 6, 1)).await.unwrap();
    assert_eq!(recent.by_month.len(), 1);
    assert_eq!(recent.by_month[0].key, "2024-01");
    let by_status: Vec<(&str, f64, i64)> = recent
        .by_status
        .iter()
        .map(|g| (g.key.as_str(), g.total, g.count))
        .collect();
    assert_eq!(by_status, vec![("Paid", 1200.0, 1), ("Pending", 0.0, 1)]);

    // More than twelve months after the January payment
    let later = svc.income(date(2025, 2, 1)).await.unwrap();
    assert!(later.by_month.is_empty());
}

#[tokio::test]
async fn test_lease_expirations() {
    let pool = memory_pool().await;
    seed(&pool).await;
    let svc = ReportService::new(Arc::new(SqliteReportRepository::new(pool.clone())));

    let soon = svc.lease_expirations(date(2024, 5, 1)).await.unwrap();
    assert_eq!(soon.expiring.len(), 1);
    assert!(soon.ended.is_empty());

    let after = svc.lease_expirations(date(2024, 7, 15)).await.unwrap();
    assert!(after.expiring.is_empty());
    assert_eq!(after.ended.len(), 1);
    assert_eq!(after.ended[0].tenant_name, "John Doe");
}

#[tokio::test]
async fn test_financial_summary() {
    let pool = memory_pool().await;
    seed(&pool).await;
    let svc = ReportService::new(Arc::new(SqliteReportRepository::new(pool.clone())));

    let summary = svc.financial_summary(date(2024, 6, 1)).await.unwrap();

    assert_eq!(summary.total_income, 1200.0);
    assert_eq!(summary.total_expenses, 300.0);
    assert_eq!(summary.net_income(), 900.0);
    assert_eq!(summary.outstanding_rent, 1200.0);
}
