// ============================================================================
// Landlord Core - Property Service
// File: crates/landlord-core/src/services/property_service.rs
// ============================================================================

use std::sync::Arc;
use landlord_shared::EntityId;
use tracing::{info, warn};
use validator::Validate;

use crate::domain::{NewProperty, Property, PropertyStatus};
use crate::error::DomainError;
use crate::repositories::PropertyRepository;

pub struct PropertyService {
    properties: Arc<dyn PropertyRepository>,
}

impl PropertyService {
    pub fn new(properties: Arc<dyn PropertyRepository>) -> Self {
        Self { properties }
    }

    pub async fn list(&self, status: Option<PropertyStatus>) -> Result<Vec<Property>, DomainError> {
        self.properties.list(status).await
    }

    pub async fn get(&self, id: EntityId) -> Result<Property, DomainError> {
        self.properties
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("Property", id))
    }

    pub async fn create(&self, input: NewProperty) -> Result<Property, DomainError> {
        let input = input.normalized();
        if let Err(e) = input.validate() {
            warn!("Property rejected: {}", e);
            return Err(e.into());
        }
        let property = self.properties.create(&input).await?;
        info!("Property {} created: {}", property.id, property.display_name());
        Ok(property)
    }

    pub async fn update(&self, id: EntityId, input: NewProperty) -> Result<Property, DomainError> {
        let input = input.normalized();
        input.validate()?;
        self.get(id).await?;
        let property = self.properties.update(id, &input).await?;
        info!("Property {} updated", id);
        Ok(property)
    }

    /// Fails with `InUse` while tenants, leases or other records still point at the property.
    pub async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        self.get(id).await?;
        self.properties.delete(id).await?;
        info!("Property {} deleted", id);
        Ok(())
    }
}
