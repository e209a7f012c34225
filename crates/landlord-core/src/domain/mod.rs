//! # Landlord Core - Domain Module
//! 
//! Domain entities for the landlord record keeper.

mod amount;
pub mod year_month;
pub mod property;
pub mod tenant;
pub mod lease;
pub mod rent_payment;
pub mod expense;
pub mod maintenance_request;
pub mod document;
pub mod report;

// Re-export all entities and enums
pub use year_month::YearMonth;
pub use property::{NewProperty, Property, PropertyStatus, PropertyType};
pub use tenant::{NewTenant, Tenant, TenantSummary};
pub use lease::{Lease, LeaseStatus, LeaseSummary, NewLease};
pub use rent_payment::{
    NewRentPayment, PaymentMethod, PaymentStatus, RentPayment, RentPaymentSummary, RentPaymentUpdate,
};
pub use expense::{Expense, ExpenseCategory, ExpenseSummary, NewExpense, PaidBy};
pub use maintenance_request::{
    MaintenanceRequest, MaintenanceStatus, MaintenanceSummary, NewMaintenanceRequest,
};
pub use document::{Document, DocumentType, NewDocument};
pub use report::{
    Dashboard, DashboardCounts, ExpenseReport, FinancialSummary, GroupTotal, IncomeReport,
    LeaseExpirations, LeaseExpiry, MaintenanceCosts, OccupancyRow, OverdueRent,
    RecentMaintenance, RecentPayment,
};
