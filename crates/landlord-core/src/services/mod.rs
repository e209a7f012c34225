//! Domain services (business logic)

pub mod rent_cycle_service;
pub mod lease_service;
pub mod payment_service;
pub mod property_service;
pub mod tenant_service;
pub mod expense_service;
pub mod maintenance_service;
pub mod document_service;
pub mod report_service;

#[cfg(test)]
pub mod testing;

pub use rent_cycle_service::{RentCycleOutcome, RentCycleService};
pub use lease_service::LeaseService;
pub use payment_service::PaymentService;
pub use property_service::PropertyService;
pub use tenant_service::TenantService;
pub use expense_service::ExpenseService;
pub use maintenance_service::MaintenanceService;
pub use document_service::DocumentService;
pub use report_service::ReportService;
