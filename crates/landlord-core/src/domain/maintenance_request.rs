// ============================================================================
// Landlord Core - Maintenance Request Entity
// File: crates/landlord-core/src/domain/maintenance_request.rs
// ============================================================================

use chrono::{DateTime, NaiveDate, Utc};
use landlord_shared::EntityId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::amount::finite_amount;

/// Maintenance status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::Open => "Open",
            MaintenanceStatus::InProgress => "In Progress",
            MaintenanceStatus::Completed => "Completed",
            MaintenanceStatus::Cancelled => "Cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Open" => Some(MaintenanceStatus::Open),
            "In Progress" => Some(MaintenanceStatus::InProgress),
            "Completed" => Some(MaintenanceStatus::Completed),
            "Cancelled" => Some(MaintenanceStatus::Cancelled),
            _ => None,
        }
    }
}

impl Default for MaintenanceStatus {
    fn default() -> Self {
        MaintenanceStatus::Open
    }
}

/// Maintenance request entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    pub id: EntityId,
    pub property_id: EntityId,
    pub tenant_id: Option<EntityId>,
    pub request_date: NaiveDate,
    pub description: String,
    pub status: MaintenanceStatus,
    pub cost_estimate: Option<f64>,
    pub actual_cost: Option<f64>,
    pub completed_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MaintenanceRequest {
    /// Cost used by reports: actual when known, otherwise the estimate.
    pub fn effective_cost(&self) -> f64 {
        self.actual_cost.or(self.cost_estimate).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewMaintenanceRequest {
    pub property_id: EntityId,
    pub tenant_id: Option<EntityId>,
    pub request_date: NaiveDate,

    #[validate(length(min = 1, max = 2000, message = "Description is required"))]
    pub description: String,

    pub status: MaintenanceStatus,

    #[validate(range(min = 0.0, message = "Cost estimate cannot be negative"), custom(function = "finite_amount"))]
    pub cost_estimate: Option<f64>,

    #[validate(range(min = 0.0, message = "Actual cost cannot be negative"), custom(function = "finite_amount"))]
    pub actual_cost: Option<f64>,

    pub completed_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Request joined with property and tenant display names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceSummary {
    pub id: EntityId,
    pub property_name: String,
    pub tenant_name: Option<String>,
    pub request_date: NaiveDate,
    pub description: String,
    pub status: MaintenanceStatus,
    pub cost_estimate: Option<f64>,
    pub actual_cost: Option<f64>,
}
