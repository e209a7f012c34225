//! Property repository trait (port)

use async_trait::async_trait;
use landlord_shared::EntityId;
use crate::domain::{NewProperty, Property, PropertyStatus};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Property>, DomainError>;
    /// Newest first, optionally restricted to one status.
    async fn list(&self, status: Option<PropertyStatus>) -> Result<Vec<Property>, DomainError>;
    async fn create(&self, property: &NewProperty) -> Result<Property, DomainError>;
    async fn update(&self, id: EntityId, property: &NewProperty) -> Result<Property, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
}
