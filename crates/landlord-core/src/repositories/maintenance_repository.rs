//! Maintenance request repository trait (port)

use async_trait::async_trait;
use chrono::NaiveDate;
use landlord_shared::EntityId;
use crate::domain::{MaintenanceRequest, MaintenanceStatus, MaintenanceSummary, NewMaintenanceRequest};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MaintenanceRepository: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<MaintenanceRequest>, DomainError>;
    async fn list(&self, status: Option<MaintenanceStatus>) -> Result<Vec<MaintenanceSummary>, DomainError>;
    async fn create(&self, request: &NewMaintenanceRequest) -> Result<MaintenanceRequest, DomainError>;
    async fn update(&self, id: EntityId, request: &NewMaintenanceRequest) -> Result<MaintenanceRequest, DomainError>;
    async fn update_status(
        &self,
        id: EntityId,
        status: MaintenanceStatus,
        actual_cost: Option<f64>,
        completed_date: Option<NaiveDate>,
    ) -> Result<MaintenanceRequest, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
}
