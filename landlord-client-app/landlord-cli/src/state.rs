use std::sync::Arc;

use landlord_core::services::{
    DocumentService, ExpenseService, LeaseService, MaintenanceService, PaymentService,
    PropertyService, RentCycleService, ReportService, TenantService,
};
use landlord_infrastructure::{
    SqliteDocumentRepository, SqliteExpenseRepository, SqliteLeaseRepository,
    SqliteMaintenanceRepository, SqlitePropertyRepository, SqliteRentPaymentRepository,
    SqliteReportRepository, SqliteTenantRepository,
};
use sqlx::SqlitePool;

/// Services wired to one SQLite pool.
pub struct AppState {
    pub rent_cycle: RentCycleService<SqliteLeaseRepository, SqliteRentPaymentRepository>,
    pub leases: LeaseService,
    pub payments: PaymentService,
    pub properties: PropertyService,
    pub tenants: TenantService,
    pub expenses: ExpenseService,
    pub maintenance: MaintenanceService,
    pub documents: DocumentService,
    pub reports: ReportService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        let leases = Arc::new(SqliteLeaseRepository::new(pool.clone()));
        let payments = Arc::new(SqliteRentPaymentRepository::new(pool.clone()));
        let properties = Arc::new(SqlitePropertyRepository::new(pool.clone()));
        let tenants = Arc::new(SqliteTenantRepository::new(pool.clone()));

        Self {
            rent_cycle: RentCycleService::new(leases.clone(), payments.clone()),
            leases: LeaseService::new(
                leases.clone(),
                tenants.clone(),
                properties.clone(),
                payments.clone(),
            ),
            payments: PaymentService::new(payments, leases),
            properties: PropertyService::new(properties.clone()),
            tenants: TenantService::new(tenants.clone(), properties.clone()),
            expenses: ExpenseService::new(
                Arc::new(SqliteExpenseRepository::new(pool.clone())),
                properties.clone(),
            ),
            maintenance: MaintenanceService::new(
                Arc::new(SqliteMaintenanceRepository::new(pool.clone())),
                properties,
                tenants,
            ),
            documents: DocumentService::new(Arc::new(SqliteDocumentRepository::new(pool.clone()))),
            reports: ReportService::new(Arc::new(SqliteReportRepository::new(pool))),
        }
    }
}
