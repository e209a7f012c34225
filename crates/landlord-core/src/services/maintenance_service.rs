// ============================================================================
// Landlord Core - Maintenance Service
// File: crates/landlord-core/src/services/maintenance_service.rs
// ============================================================================
//! Maintenance request tracking.

use std::sync::Arc;
use chrono::NaiveDate;
use landlord_shared::EntityId;
use tracing::{info, warn};
use validator::Validate;

use crate::domain::{MaintenanceRequest, MaintenanceStatus, MaintenanceSummary, NewMaintenanceRequest};
use crate::error::DomainError;
use crate::repositories::{MaintenanceRepository, PropertyRepository, TenantRepository};

pub struct MaintenanceService {
    requests: Arc<dyn MaintenanceRepository>,
    properties: Arc<dyn PropertyRepository>,
    tenants: Arc<dyn TenantRepository>,
}

impl MaintenanceService {
    pub fn new(
        requests: Arc<dyn MaintenanceRepository>,
        properties: Arc<dyn PropertyRepository>,
        tenants: Arc<dyn TenantRepository>,
    ) -> Self {
        Self {
            requests,
            properties,
            tenants,
        }
    }

    pub async fn list(&self, status: Option<MaintenanceStatus>) -> Result<Vec<MaintenanceSummary>, DomainError> {
        self.requests.list(status).await
    }

    pub async fn get(&self, id: EntityId) -> Result<MaintenanceRequest, DomainError> {
        self.requests
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("Maintenance request", id))
    }

    pub async fn create(&self, input: &NewMaintenanceRequest) -> Result<MaintenanceRequest, DomainError> {
        self.check(input).await?;
        let request = self.requests.create(input).await?;
        info!("Maintenance request {} opened for property {}", request.id, request.property_id);
        Ok(request)
    }

    pub async fn update(&self, id: EntityId, input: &NewMaintenanceRequest) -> Result<MaintenanceRequest, DomainError> {
        self.get(id).await?;
        self.check(input).await?;
        let request = self.requests.update(id, input).await?;
        info!("Maintenance request {} updated", id);
        Ok(request)
    }

    /// Move a request to `status`.
    ///
    /// Completing a request records `actual_cost` and a completion date, which
    /// defaults to `today`. Any other status clears both.
    pub async fn update_status(
        &self,
        id: EntityId,
        status: MaintenanceStatus,
        actual_cost: Option<f64>,
        completed_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<MaintenanceRequest, DomainError> {
        if let Some(cost) = actual_cost {
            if !cost.is_finite() || cost < 0.0 {
                warn!("Rejected actual cost {} for maintenance request {}", cost, id);
                return Err(DomainError::InvalidValue {
                    field: "actual_cost",
                    value: cost.to_string(),
                });
            }
        }
        self.get(id).await?;

        let (actual_cost, completed_date) = match status {
            MaintenanceStatus::Completed => (actual_cost, Some(completed_date.unwrap_or(today))),
            _ => (None, None),
        };
        let request = self
            .requests
            .update_status(id, status, actual_cost, completed_date)
            .await?;
        info!("Maintenance request {} is now {}", id, status.as_str());
        Ok(request)
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        self.get(id).await?;
        self.requests.delete(id).await?;
        info!("Maintenance request {} deleted", id);
        Ok(())
    }

    async fn check(&self, input: &NewMaintenanceRequest) -> Result<(), DomainError> {
        if let Err(e) = input.validate() {
            warn!("Maintenance request rejected: {}", e);
            return Err(e.into());
        }
        if self.properties.find_by_id(input.property_id).await?.is_none() {
            return Err(DomainError::not_found("Property", input.property_id));
        }
        if let Some(tenant_id) = input.tenant_id {
            if self.tenants.find_by_id(tenant_id).await?.is_none() {
                return Err(DomainError::not_found("Tenant", tenant_id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{MockMaintenanceRepository, MockPropertyRepository, MockTenantRepository};
    use chrono::Utc;
    use mockall::predicate::eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(id: EntityId) -> MaintenanceRequest {
        MaintenanceRequest {
            id,
            property_id: 1,
            tenant_id: None,
            request_date: date(2024, 6, 1),
            description: "Broken window".to_string(),
            status: MaintenanceStatus::InProgress,
            cost_estimate: Some(150.0),
            actual_cost: None,
            completed_date: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    fn service(repo: MockMaintenanceRepository) -> MaintenanceService {
        MaintenanceService::new(
            Arc::new(repo),
            Arc::new(MockPropertyRepository::new()),
            Arc::new(MockTenantRepository::new()),
        )
    }

    #[tokio::test]
    async fn test_completed_defaults_date_to_today() {
        let mut repo = MockMaintenanceRepository::new();
        repo.expect_find_by_id().returning(|id| Ok(Some(request(id))));
        repo.expect_update_status()
            .with(
                eq(3),
                eq(MaintenanceStatus::Completed),
                eq(Some(140.0)),
                eq(Some(date(2024, 6, 9))),
            )
            .times(1)
            .returning(|id, status, cost, done| {
                let mut r = request(id);
                r.status = status;
                r.actual_cost = cost;
                r.completed_date = done;
                Ok(r)
            });

        let updated = service(repo)
            .update_status(3, MaintenanceStatus::Completed, Some(140.0), None, date(2024, 6, 9))
            .await
            .unwrap();
        assert_eq!(updated.completed_date, Some(date(2024, 6, 9)));
    }

    #[tokio::test]
    async fn test_completed_keeps_explicit_date() {
        let mut repo = MockMaintenanceRepository::new();
        repo.expect_find_by_id().returning(|id| Ok(Some(request(id))));
        repo.expect_update_status()
            .with(
                eq(3),
                eq(MaintenanceStatus::Completed),
                eq(None),
                eq(Some(date(2024, 6, 5))),
            )
            .times(1)
            .returning(|id, _, _, _| Ok(request(id)));

        service(repo)
            .update_status(3, MaintenanceStatus::Completed, None, Some(date(2024, 6, 5)), date(2024, 6, 9))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_reopening_clears_cost_and_date() {
        let mut repo = MockMaintenanceRepository::new();
        repo.expect_find_by_id().returning(|id| Ok(Some(request(id))));
        repo.expect_update_status()
            .with(eq(3), eq(MaintenanceStatus::Open), eq(None), eq(None))
            .times(1)
            .returning(|id, _, _, _| Ok(request(id)));

        service(repo)
            .update_status(3, MaintenanceStatus::Open, Some(99.0), Some(date(2024, 6, 5)), date(2024, 6, 9))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_negative_cost_rejected() {
        let mut repo = MockMaintenanceRepository::new();
        repo.expect_update_status().never();

        let err = service(repo)
            .update_status(3, MaintenanceStatus::Completed, Some(-1.0), None, date(2024, 6, 9))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue { field: "actual_cost", .. }));
    }

    #[tokio::test]
    async fn test_infinite_cost_rejected() {
        let mut repo = MockMaintenanceRepository::new();
        repo.expect_update_status().never();

        let err = service(repo)
            .update_status(3, MaintenanceStatus::Completed, Some(f64::INFINITY), None, date(2024, 6, 9))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue { field: "actual_cost", .. }));
    }
}
