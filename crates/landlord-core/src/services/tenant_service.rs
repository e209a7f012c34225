// ============================================================================
// Landlord Core - Tenant Service
// File: crates/landlord-core/src/services/tenant_service.rs
// ============================================================================

use std::sync::Arc;
use landlord_shared::EntityId;
use tracing::{info, warn};
use validator::Validate;

use crate::domain::{NewTenant, Tenant, TenantSummary};
use crate::error::DomainError;
use crate::repositories::{PropertyRepository, TenantRepository};

pub struct TenantService {
    tenants: Arc<dyn TenantRepository>,
    properties: Arc<dyn PropertyRepository>,
}

impl TenantService {
    pub fn new(tenants: Arc<dyn TenantRepository>, properties: Arc<dyn PropertyRepository>) -> Self {
        Self { tenants, properties }
    }

    pub async fn list(&self, property_id: Option<EntityId>) -> Result<Vec<TenantSummary>, DomainError> {
        self.tenants.list(property_id).await
    }

    pub async fn get(&self, id: EntityId) -> Result<Tenant, DomainError> {
        self.tenants
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("Tenant", id))
    }

    pub async fn create(&self, input: &NewTenant) -> Result<Tenant, DomainError> {
        self.check(input).await?;
        let tenant = self.tenants.create(input).await?;
        info!("Tenant {} created: {}", tenant.id, tenant.name);
        Ok(tenant)
    }

    pub async fn update(&self, id: EntityId, input: &NewTenant) -> Result<Tenant, DomainError> {
        self.get(id).await?;
        self.check(input).await?;
        let tenant = self.tenants.update(id, input).await?;
        info!("Tenant {} updated", id);
        Ok(tenant)
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        self.get(id).await?;
        self.tenants.delete(id).await?;
        info!("Tenant {} deleted", id);
        Ok(())
    }

    async fn check(&self, input: &NewTenant) -> Result<(), DomainError> {
        if let Err(e) = input.validate() {
            warn!("Tenant rejected: {}", e);
            return Err(e.into());
        }
        if let Some(property_id) = input.property_id {
            if self.properties.find_by_id(property_id).await?.is_none() {
                return Err(DomainError::not_found("Property", property_id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{MockPropertyRepository, MockTenantRepository};
    use chrono::Utc;

    fn input(email: Option<&str>, property_id: Option<EntityId>) -> NewTenant {
        NewTenant {
            name: "Jane Roe".to_string(),
            property_id,
            phone: Some("555-0100".to_string()),
            email: email.map(str::to_string),
            national_id: None,
            emergency_contact: None,
            notes: None,
        }
    }

    fn stored(id: EntityId, t: &NewTenant) -> Tenant {
        Tenant {
            id,
            name: t.name.clone(),
            property_id: t.property_id,
            phone: t.phone.clone(),
            email: t.email.clone(),
            national_id: t.national_id.clone(),
            emergency_contact: t.emergency_contact.clone(),
            notes: t.notes.clone(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_without_property() {
        let mut tenants = MockTenantRepository::new();
        tenants.expect_create().times(1).returning(|t| Ok(stored(10, t)));
        let mut properties = MockPropertyRepository::new();
        properties.expect_find_by_id().never();
        let svc = TenantService::new(Arc::new(tenants), Arc::new(properties));

        let tenant = svc.create(&input(Some("jane@example.com"), None)).await.unwrap();
        assert_eq!(tenant.id, 10);
    }

    #[tokio::test]
    async fn test_invalid_email_rejected() {
        let mut tenants = MockTenantRepository::new();
        tenants.expect_create().never();
        let svc = TenantService::new(Arc::new(tenants), Arc::new(MockPropertyRepository::new()));

        let err = svc.create(&input(Some("not-an-email"), None)).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_unknown_property_rejected() {
        let mut tenants = MockTenantRepository::new();
        tenants.expect_create().never();
        let mut properties = MockPropertyRepository::new();
        properties.expect_find_by_id().returning(|_| Ok(None));
        let svc = TenantService::new(Arc::new(tenants), Arc::new(properties));

        let err = svc.create(&input(None, Some(8))).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Property", id: 8 }));
    }
}
