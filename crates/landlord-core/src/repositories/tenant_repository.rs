//! Tenant repository trait (port)

use async_trait::async_trait;
use landlord_shared::EntityId;
use crate::domain::{NewTenant, Tenant, TenantSummary};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantRepository: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Tenant>, DomainError>;
    async fn list(&self, property_id: Option<EntityId>) -> Result<Vec<TenantSummary>, DomainError>;
    async fn create(&self, tenant: &NewTenant) -> Result<Tenant, DomainError>;
    async fn update(&self, id: EntityId, tenant: &NewTenant) -> Result<Tenant, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
}
