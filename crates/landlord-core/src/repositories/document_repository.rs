//! Document repository trait (port)

use async_trait::async_trait;
use landlord_shared::EntityId;
use crate::domain::{Document, DocumentType, NewDocument};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Document>, DomainError>;
    async fn list(&self, related_type: Option<DocumentType>) -> Result<Vec<Document>, DomainError>;
    /// Whether the record a document would attach to exists.
    async fn related_exists(&self, related_type: DocumentType, related_id: EntityId) -> Result<bool, DomainError>;
    async fn create(&self, document: &NewDocument) -> Result<Document, DomainError>;
    async fn update_description(&self, id: EntityId, description: Option<String>) -> Result<Document, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
}
