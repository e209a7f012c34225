// ============================================================================
// Landlord Core - Lease Service
// File: crates/landlord-core/src/services/lease_service.rs
// ============================================================================
//! Lease lifecycle: create, edit, terminate, expire.

use std::sync::Arc;
use chrono::NaiveDate;
use landlord_shared::EntityId;
use tracing::{info, warn};
use validator::Validate;

use crate::domain::{Lease, LeaseStatus, LeaseSummary, NewLease, RentPayment};
use crate::error::DomainError;
use crate::repositories::{
    LeaseRepository, PropertyRepository, RentPaymentRepository, TenantRepository,
};

pub struct LeaseService {
    leases: Arc<dyn LeaseRepository>,
    tenants: Arc<dyn TenantRepository>,
    properties: Arc<dyn PropertyRepository>,
    payments: Arc<dyn RentPaymentRepository>,
}

impl LeaseService {
    pub fn new(
        leases: Arc<dyn LeaseRepository>,
        tenants: Arc<dyn TenantRepository>,
        properties: Arc<dyn PropertyRepository>,
        payments: Arc<dyn RentPaymentRepository>,
    ) -> Self {
        Self {
            leases,
            tenants,
            properties,
            payments,
        }
    }

    pub async fn list(&self, status: Option<LeaseStatus>) -> Result<Vec<LeaseSummary>, DomainError> {
        self.leases.list(status).await
    }

    pub async fn get(&self, id: EntityId) -> Result<Lease, DomainError> {
        self.leases
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("Lease", id))
    }

    pub async fn create(&self, input: &NewLease) -> Result<Lease, DomainError> {
        self.check(input).await?;
        let lease = self.leases.create(input).await?;
        info!("Lease {} created for tenant {} at property {}", lease.id, lease.tenant_id, lease.property_id);
        Ok(lease)
    }

    pub async fn update(&self, id: EntityId, input: &NewLease) -> Result<Lease, DomainError> {
        self.get(id).await?;
        self.check(input).await?;
        let lease = self.leases.update(id, input).await?;
        info!("Lease {} updated", id);
        Ok(lease)
    }

    /// Mark a lease as Terminated. Rent stops accruing from the next generation run.
    pub async fn terminate(&self, id: EntityId) -> Result<Lease, DomainError> {
        let lease = self.get(id).await?;
        if lease.status == LeaseStatus::Terminated {
            warn!("Lease {} is already terminated", id);
            return Ok(lease);
        }
        let lease = self.leases.set_status(id, LeaseStatus::Terminated).await?;
        info!("Lease {} terminated", id);
        Ok(lease)
    }

    /// Expire Active leases whose end date has passed.
    pub async fn expire_ended(&self, as_of: NaiveDate) -> Result<u64, DomainError> {
        let count = self.leases.expire_ended(as_of).await?;
        info!("Expired {} leases ended before {}", count, as_of);
        Ok(count)
    }

    /// Rent payments of a lease, latest due date first.
    pub async fn payment_history(&self, id: EntityId) -> Result<Vec<RentPayment>, DomainError> {
        self.get(id).await?;
        self.payments.list_by_lease(id).await
    }

    async fn check(&self, input: &NewLease) -> Result<(), DomainError> {
        input.validate().map_err(|e| {
            warn!("Lease rejected: {}", e);
            DomainError::from(e)
        })?;
        if self.tenants.find_by_id(input.tenant_id).await?.is_none() {
            return Err(DomainError::not_found("Tenant", input.tenant_id));
        }
        if self.properties.find_by_id(input.property_id).await?.is_none() {
            return Err(DomainError::not_found("Property", input.property_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Property, PropertyStatus, PropertyType, Tenant};
    use crate::repositories::{MockPropertyRepository, MockTenantRepository};
    use crate::services::testing::InMemoryStore;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tenant(id: EntityId) -> Tenant {
        Tenant {
            id,
            name: "John Doe".to_string(),
            property_id: None,
            phone: None,
            email: None,
            national_id: None,
            emergency_contact: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    fn property(id: EntityId) -> Property {
        Property {
            id,
            name: Some("Test Property".to_string()),
            address: "123 Test Street".to_string(),
            property_type: PropertyType::Apartment,
            size: None,
            bedrooms: Some(2),
            bathrooms: Some(1),
            furnished: false,
            rent_amount: 1200.0,
            deposit_amount: 1200.0,
            status: PropertyStatus::Vacant,
            created_at: Utc::now(),
        }
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

    fn service_with(store: Arc<InMemoryStore>, tenant_exists: bool, property_exists: bool) -> LeaseService {
        let mut tenants = MockTenantRepository::new();
        tenants
            .expect_find_by_id()
            .returning(move |id| Ok(tenant_exists.then(|| tenant(id))));
        let mut properties = MockPropertyRepository::new();
        properties
            .expect_find_by_id()
            .returning(move |id| Ok(property_exists.then(|| property(id))));
        LeaseService::new(store.clone(), Arc::new(tenants), Arc::new(properties), store)
    }

    #[tokio::test]
    async fn test_create_and_terminate() {
        let store = Arc::new(InMemoryStore::default());
        let svc = service_with(store.clone(), true, true);

        let lease = svc.create(&new_lease()).await.unwrap();
        assert_eq!(lease.status, LeaseStatus::Active);

        let terminated = svc.terminate(lease.id).await.unwrap();
        assert_eq!(terminated.status, LeaseStatus::Terminated);

        // Terminating twice is a no-op
        let again = svc.terminate(lease.id).await.unwrap();
        assert_eq!(again.status, LeaseStatus::Terminated);
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_tenant() {
        let svc = service_with(Arc::new(InMemoryStore::default()), false, true);
        let err = svc.create(&new_lease()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Tenant", id: 1 }));
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_property() {
        let svc = service_with(Arc::new(InMemoryStore::default()), true, false);
        let err = svc.create(&new_lease()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Property", .. }));
    }

    #[tokio::test]
    async fn test_create_rejects_inverted_dates() {
        let svc = service_with(Arc::new(InMemoryStore::default()), true, true);
        let mut input = new_lease();
        input.end_date = Some(date(2023, 6, 1));
        let err = svc.create(&input).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_nan_rent() {
        let store = Arc::new(InMemoryStore::default());
        let svc = service_with(store.clone(), true, true);
        let mut input = new_lease();
        input.rent_amount = f64::NAN;

        let err = svc.create(&input).await.unwrap_err();

        assert!(matches!(err, DomainError::ValidationError(_)));
        assert!(svc.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_terminate_missing_lease() {
        let svc = service_with(Arc::new(InMemoryStore::default()), true, true);
        let err = svc.terminate(42).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Lease", id: 42 }));
    }

    #[tokio::test]
    async fn test_expire_ended_only_touches_active_past_end() {
        let store = Arc::new(InMemoryStore::default());
        let svc = service_with(store.clone(), true, true);

        let ended = svc.create(&new_lease()).await.unwrap();
        let mut open_ended = new_lease();
        open_ended.end_date = None;
        let open_ended = svc.create(&open_ended).await.unwrap();

        let count = svc.expire_ended(date(2025, 1, 1)).await.unwrap();

        assert_eq!(count, 1);
        assert_eq!(svc.get(ended.id).await.unwrap().status, LeaseStatus::Expired);
        assert_eq!(svc.get(open_ended.id).await.unwrap().status, LeaseStatus::Active);
    }
}
