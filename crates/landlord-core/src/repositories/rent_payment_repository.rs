//! Rent payment repository trait (port)

use async_trait::async_trait;
use chrono::NaiveDate;
use landlord_shared::EntityId;
use crate::domain::{
    NewRentPayment, PaymentStatus, RentPayment, RentPaymentSummary, RentPaymentUpdate, YearMonth,
};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RentPaymentRepository: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<RentPayment>, DomainError>;
    /// Ordered by due date, latest first.
    async fn list(&self, status: Option<PaymentStatus>) -> Result<Vec<RentPaymentSummary>, DomainError>;
    async fn list_by_lease(&self, lease_id: EntityId) -> Result<Vec<RentPayment>, DomainError>;
    async fn exists_for_month(&self, lease_id: EntityId, month: YearMonth) -> Result<bool, DomainError>;
    /// Fails with `DuplicateRentPayment` when the lease already has a row for the month.
    async fn create(&self, payment: &NewRentPayment) -> Result<RentPayment, DomainError>;
    async fn update(&self, id: EntityId, payment: &RentPaymentUpdate) -> Result<RentPayment, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
    /// Pending or Partial rows due before `as_of` become Overdue; returns how many changed.
    async fn mark_overdue(&self, as_of: NaiveDate) -> Result<u64, DomainError>;
}
