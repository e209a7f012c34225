//! Lease repository trait (port)

use async_trait::async_trait;
use chrono::NaiveDate;
use landlord_shared::EntityId;
use crate::domain::{Lease, LeaseStatus, LeaseSummary, NewLease};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaseRepository: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Lease>, DomainError>;
    async fn list(&self, status: Option<LeaseStatus>) -> Result<Vec<LeaseSummary>, DomainError>;
    /// Leases with status Active whose start date is on or before `as_of`.
    async fn list_active(&self, as_of: NaiveDate) -> Result<Vec<Lease>, DomainError>;
    async fn create(&self, lease: &NewLease) -> Result<Lease, DomainError>;
    async fn update(&self, id: EntityId, lease: &NewLease) -> Result<Lease, DomainError>;
    async fn set_status(&self, id: EntityId, status: LeaseStatus) -> Result<Lease, DomainError>;
    /// Mark Active leases that ended before `as_of` as Expired; returns how many changed.
    async fn expire_ended(&self, as_of: NaiveDate) -> Result<u64, DomainError>;
}
