// ============================================================================
// Landlord Core - Lease Entity
// File: crates/landlord-core/src/domain/lease.rs
// Description: Tenant-property agreement and its lifecycle status
// ============================================================================

use chrono::{DateTime, NaiveDate, Utc};
use landlord_shared::EntityId;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::amount::finite_amount;

/// Lease status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaseStatus {
    Active,
    Terminated,
    Expired,
}

impl LeaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaseStatus::Active => "Active",
            LeaseStatus::Terminated => "Terminated",
            LeaseStatus::Expired => "Expired",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Active" => Some(LeaseStatus::Active),
            "Terminated" => Some(LeaseStatus::Terminated),
            "Expired" => Some(LeaseStatus::Expired),
            _ => None,
        }
    }
}

impl Default for LeaseStatus {
    fn default() -> Self {
        LeaseStatus::Active
    }
}

/// Lease entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lease {
    pub id: EntityId,
    pub tenant_id: EntityId,
    pub property_id: EntityId,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub rent_amount: f64,
    pub deposit_amount: f64,
    pub status: LeaseStatus,
    pub created_at: DateTime<Utc>,
}

impl Lease {
    /// Whether rent accrues for this lease on `date`: status Active and already started.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.status == LeaseStatus::Active && self.start_date <= date
    }

    pub fn has_ended(&self, as_of: NaiveDate) -> bool {
        self.end_date.is_some_and(|end| end < as_of)
    }
}

/// Input for creating or editing a lease
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_lease_dates"))]
pub struct NewLease {
    pub tenant_id: EntityId,
    pub property_id: EntityId,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,

    #[validate(range(min = 0.0, message = "Rent amount cannot be negative"), custom(function = "finite_amount"))]
    pub rent_amount: f64,

    #[validate(range(min = 0.0, message = "Deposit amount cannot be negative"), custom(function = "finite_amount"))]
    pub deposit_amount: f64,

    pub status: LeaseStatus,
}

fn validate_lease_dates(lease: &NewLease) -> Result<(), ValidationError> {
    match lease.end_date {
        Some(end) if end < lease.start_date => {
            let mut err = ValidationError::new("end_before_start");
            err.message = Some("End date must not be before start date".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

/// Lease joined with tenant and property display names, for listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaseSummary {
    pub id: EntityId,
    pub tenant_name: String,
    pub property_name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub rent_amount: f64,
    pub status: LeaseStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_lease() -> NewLease {
        NewLease {
            tenant_id: 1,
            property_id: 1,
            start_date: date(2024, 1, 1),
            end_date: Some(date(2024, 12, 31)),
            rent_amount: 1200.0,
            deposit_amount: 1200.0,
            status: LeaseStatus::Active,
        }
    }

    #[test]
    fn test_status_round_trip() {
        for status in [LeaseStatus::Active, LeaseStatus::Terminated, LeaseStatus::Expired] {
            assert_eq!(LeaseStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(LeaseStatus::from_str("active"), None);
    }

    #[test]
    fn test_valid_lease_passes() {
        assert!(new_lease().validate().is_ok());
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut lease = new_lease();
        lease.end_date = Some(date(2023, 12, 31));
        assert!(lease.validate().is_err());
    }

    #[test]
    fn test_negative_rent_rejected() {
        let mut lease = new_lease();
        lease.rent_amount = -1.0;
        assert!(lease.validate().is_err());
    }

    #[test]
    fn test_non_finite_amounts_rejected() {
        let mut lease = new_lease();
        lease.rent_amount = f64::NAN;
        assert!(lease.validate().is_err());

        let mut lease = new_lease();
        lease.deposit_amount = f64::INFINITY;
        assert!(lease.validate().is_err());
    }

    #[test]
    fn test_active_on_requires_start() {
        let lease = Lease {
            id: 1,
            tenant_id: 1,
            property_id: 1,
            start_date: date(2024, 2, 1),
            end_date: None,
            rent_amount: 1000.0,
            deposit_amount: 0.0,
            status: LeaseStatus::Active,
            created_at: Utc::now(),
        };
        assert!(!lease.is_active_on(date(2024, 1, 31)));
        assert!(lease.is_active_on(date(2024, 2, 1)));

        let terminated = Lease { status: LeaseStatus::Terminated, ..lease };
        assert!(!terminated.is_active_on(date(2024, 3, 1)));
    }
}
