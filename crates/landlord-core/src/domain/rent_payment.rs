// ============================================================================
// Landlord Core - Rent Payment Entity
// File: crates/landlord-core/src/domain/rent_payment.rs
// Description: One rent-due record per lease per calendar month
// ============================================================================

use chrono::{DateTime, NaiveDate, Utc};
use landlord_shared::EntityId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::amount::finite_amount;
use super::lease::Lease;
use super::year_month::YearMonth;
use crate::error::DomainError;

/// Payment status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Partial,
    Overdue,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Partial => "Partial",
            PaymentStatus::Overdue => "Overdue",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(PaymentStatus::Pending),
            "Paid" => Some(PaymentStatus::Paid),
            "Partial" => Some(PaymentStatus::Partial),
            "Overdue" => Some(PaymentStatus::Overdue),
            _ => None,
        }
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Pending
    }
}

/// Payment method enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    BankTransfer,
    Cheque,
    Online,
    Other,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Cheque => "Cheque",
            PaymentMethod::Online => "Online",
            PaymentMethod::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Cash" => Some(PaymentMethod::Cash),
            "Bank Transfer" => Some(PaymentMethod::BankTransfer),
            "Cheque" => Some(PaymentMethod::Cheque),
            "Online" => Some(PaymentMethod::Online),
            "Other" => Some(PaymentMethod::Other),
            _ => None,
        }
    }
}

/// Rent payment entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentPayment {
    pub id: EntityId,
    pub lease_id: EntityId,
    // Copied from the lease when the row is created
    pub tenant_id: EntityId,
    pub property_id: EntityId,
    pub month: YearMonth,
    pub due_date: NaiveDate,
    pub amount_due: f64,
    pub amount_paid: f64,
    pub status: PaymentStatus,
    pub payment_date: Option<NaiveDate>,
    pub payment_method: Option<PaymentMethod>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RentPayment {
    pub fn balance(&self) -> f64 {
        self.amount_due - self.amount_paid
    }

    pub fn is_overdue(&self, as_of: NaiveDate) -> bool {
        self.status == PaymentStatus::Overdue
            || (self.amount_due > self.amount_paid && self.due_date < as_of)
    }

    /// Add a received amount and derive the new status from the remaining balance.
    pub fn apply_payment(
        &mut self,
        amount: f64,
        paid_on: NaiveDate,
        method: Option<PaymentMethod>,
    ) -> Result<(), DomainError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(DomainError::ValidationError(
                "Payment amount must be greater than zero".to_string(),
            ));
        }

        self.amount_paid += amount;
        self.payment_date = Some(paid_on);
        if method.is_some() {
            self.payment_method = method;
        }
        self.status = if self.amount_paid >= self.amount_due {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Partial
        };
        Ok(())
    }

    pub fn to_update(&self) -> RentPaymentUpdate {
        RentPaymentUpdate {
            month: self.month,
            due_date: self.due_date,
            amount_due: self.amount_due,
            amount_paid: self.amount_paid,
            status: self.status,
            payment_date: self.payment_date,
            payment_method: self.payment_method,
            notes: self.notes.clone(),
        }
    }
}

/// Input for inserting a rent payment row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewRentPayment {
    pub lease_id: EntityId,
    pub tenant_id: EntityId,
    pub property_id: EntityId,
    pub month: YearMonth,
    pub due_date: NaiveDate,

    #[validate(range(min = 0.0, message = "Amount due cannot be negative"), custom(function = "finite_amount"))]
    pub amount_due: f64,

    #[validate(range(min = 0.0, message = "Amount paid cannot be negative"), custom(function = "finite_amount"))]
    pub amount_paid: f64,

    pub status: PaymentStatus,
    pub payment_date: Option<NaiveDate>,
    pub payment_method: Option<PaymentMethod>,

    #[validate(length(max = 1000, message = "Notes too long"))]
    pub notes: Option<String>,
}

impl NewRentPayment {
    /// The Pending row for `lease` in `month`, due on the first of the following month.
    /// The rent amount is copied as-is from the lease.
    pub fn pending_for(lease: &Lease, month: YearMonth) -> Result<Self, DomainError> {
        Ok(Self {
            lease_id: lease.id,
            tenant_id: lease.tenant_id,
            property_id: lease.property_id,
            month,
            due_date: month.due_date()?,
            amount_due: lease.rent_amount,
            amount_paid: 0.0,
            status: PaymentStatus::Pending,
            payment_date: None,
            payment_method: None,
            notes: None,
        })
    }
}

/// Editable fields of an existing rent payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RentPaymentUpdate {
    pub month: YearMonth,
    pub due_date: NaiveDate,

    #[validate(range(min = 0.0, message = "Amount due cannot be negative"), custom(function = "finite_amount"))]
    pub amount_due: f64,

    #[validate(range(min = 0.0, message = "Amount paid cannot be negative"), custom(function = "finite_amount"))]
    pub amount_paid: f64,

    pub status: PaymentStatus,
    pub payment_date: Option<NaiveDate>,
    pub payment_method: Option<PaymentMethod>,

    #[validate(length(max = 1000, message = "Notes too long"))]
    pub notes: Option<String>,
}

/// Rent payment joined with tenant and property display names, for listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentPaymentSummary {
    pub id: EntityId,
    pub lease_id: EntityId,
    pub tenant_name: String,
    pub property_name: String,
    pub month: YearMonth,
    pub due_date: NaiveDate,
    pub amount_due: f64,
    pub amount_paid: f64,
    pub status: PaymentStatus,
    pub payment_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lease::LeaseStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn payment(amount_due: f64) -> RentPayment {
        RentPayment {
            id: 1,
            lease_id: 1,
            tenant_id: 2,
            property_id: 3,
            month: YearMonth::parse("2024-01").unwrap(),
            due_date: date(2024, 2, 1),
            amount_due,
            amount_paid: 0.0,
            status: PaymentStatus::Pending,
            payment_date: None,
            payment_method: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_method_uses_display_text() {
        assert_eq!(PaymentMethod::BankTransfer.as_str(), "Bank Transfer");
        assert_eq!(PaymentMethod::from_str("Bank Transfer"), Some(PaymentMethod::BankTransfer));
        assert_eq!(PaymentMethod::from_str("BankTransfer"), None);
    }

    #[test]
    fn test_partial_then_paid() {
        let mut p = payment(1200.0);

        p.apply_payment(500.0, date(2024, 1, 20), Some(PaymentMethod::Cash)).unwrap();
        assert_eq!(p.status, PaymentStatus::Partial);
        assert_eq!(p.balance(), 700.0);

        p.apply_payment(700.0, date(2024, 1, 28), None).unwrap();
        assert_eq!(p.status, PaymentStatus::Paid);
        assert_eq!(p.payment_date, Some(date(2024, 1, 28)));
        assert_eq!(p.payment_method, Some(PaymentMethod::Cash));
    }

    #[test]
    fn test_non_positive_payment_rejected() {
        let mut p = payment(1200.0);
        assert!(p.apply_payment(0.0, date(2024, 1, 20), None).is_err());
        assert!(p.apply_payment(f64::NAN, date(2024, 1, 20), None).is_err());
        assert!(p.apply_payment(f64::INFINITY, date(2024, 1, 20), None).is_err());
        assert_eq!(p.status, PaymentStatus::Pending);
        assert_eq!(p.amount_paid, 0.0);
    }

    #[test]
    fn test_non_finite_amounts_fail_validation() {
        let mut update = payment(1200.0).to_update();
        assert!(update.validate().is_ok());

        update.amount_due = f64::NAN;
        assert!(update.validate().is_err());

        update.amount_due = 1200.0;
        update.amount_paid = f64::INFINITY;
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_overdue_after_due_date_with_balance() {
        let p = payment(1200.0);
        assert!(!p.is_overdue(date(2024, 2, 1)));
        assert!(p.is_overdue(date(2024, 2, 2)));
    }

    #[test]
    fn test_pending_for_copies_lease() {
        let lease = Lease {
            id: 9,
            tenant_id: 4,
            property_id: 5,
            start_date: date(2024, 1, 1),
            end_date: None,
            rent_amount: -10.0,
            deposit_amount: 0.0,
            status: LeaseStatus::Active,
            created_at: Utc::now(),
        };
        let month = YearMonth::parse("2024-12").unwrap();
        let row = NewRentPayment::pending_for(&lease, month).unwrap();

        assert_eq!((row.lease_id, row.tenant_id, row.property_id), (9, 4, 5));
        assert_eq!(row.amount_due, -10.0);
        assert_eq!(row.amount_paid, 0.0);
        assert_eq!(row.status, PaymentStatus::Pending);
        assert_eq!(row.due_date, date(2025, 1, 1));
    }
}
