//! Read models produced by the dashboard and report queries.

use chrono::NaiveDate;
use landlord_shared::EntityId;
use serde::{Deserialize, Serialize};

use super::maintenance_request::MaintenanceStatus;
use super::rent_payment::PaymentStatus;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardCounts {
    pub total_properties: i64,
    pub occupied_properties: i64,
    pub total_tenants: i64,
    pub open_maintenance: i64,
    pub total_income: f64,
    pub total_expenses: f64,
    pub overdue_payments: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentPayment {
    pub tenant_name: String,
    pub amount_paid: f64,
    pub payment_date: Option<NaiveDate>,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentMaintenance {
    pub description: String,
    pub status: MaintenanceStatus,
    pub request_date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub counts: DashboardCounts,
    pub recent_payments: Vec<RecentPayment>,
    pub recent_maintenance: Vec<RecentMaintenance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancyRow {
    pub property_id: EntityId,
    pub property_name: String,
    pub status: String,
    pub active_leases: i64,
    pub current_tenant: Option<String>,
}

/// A total grouped under a text key (month, category, status, property).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTotal {
    pub key: String,
    pub total: f64,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverdueRent {
    pub payment_id: EntityId,
    pub tenant_name: String,
    pub property_name: String,
    pub month: String,
    pub due_date: NaiveDate,
    pub amount_due: f64,
    pub amount_paid: f64,
}

impl OverdueRent {
    pub fn outstanding(&self) -> f64 {
        self.amount_due - self.amount_paid
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaseExpiry {
    pub lease_id: EntityId,
    pub tenant_name: String,
    pub property_name: String,
    pub end_date: NaiveDate,
    pub rent_amount: f64,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub outstanding_rent: f64,
    pub income_by_month: Vec<GroupTotal>,
    pub expenses_by_month: Vec<GroupTotal>,
}

impl FinancialSummary {
    pub fn net_income(&self) -> f64 {
        self.total_income - self.total_expenses
    }
}

/// Rent income trend plus a breakdown of all payments by status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeReport {
    pub by_month: Vec<GroupTotal>,
    pub by_status: Vec<GroupTotal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseReport {
    pub by_category: Vec<GroupTotal>,
    pub by_property: Vec<GroupTotal>,
    pub by_month: Vec<GroupTotal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaseExpirations {
    /// Active leases ending inside the look-ahead window.
    pub expiring: Vec<LeaseExpiry>,
    /// Leases whose end date has already passed.
    pub ended: Vec<LeaseExpiry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceCosts {
    pub by_property: Vec<GroupTotal>,
    pub by_status: Vec<GroupTotal>,
}
