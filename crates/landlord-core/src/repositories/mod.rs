//! Repository traits (ports)

pub mod property_repository;
pub mod tenant_repository;
pub mod lease_repository;
pub mod rent_payment_repository;
pub mod expense_repository;
pub mod maintenance_repository;
pub mod document_repository;
pub mod report_repository;

pub use property_repository::PropertyRepository;
pub use tenant_repository::TenantRepository;
pub use lease_repository::LeaseRepository;
pub use rent_payment_repository::RentPaymentRepository;
pub use expense_repository::ExpenseRepository;
pub use maintenance_repository::MaintenanceRepository;
pub use document_repository::DocumentRepository;
pub use report_repository::ReportRepository;

#[cfg(test)]
pub use property_repository::MockPropertyRepository;
#[cfg(test)]
pub use tenant_repository::MockTenantRepository;
#[cfg(test)]
pub use lease_repository::MockLeaseRepository;
#[cfg(test)]
pub use rent_payment_repository::MockRentPaymentRepository;
#[cfg(test)]
pub use expense_repository::MockExpenseRepository;
#[cfg(test)]
pub use maintenance_repository::MockMaintenanceRepository;
#[cfg(test)]
pub use document_repository::MockDocumentRepository;
#[cfg(test)]
pub use report_repository::MockReportRepository;
