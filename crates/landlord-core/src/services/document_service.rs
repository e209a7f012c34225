// ============================================================================
// Landlord Core - Document Service
// File: crates/landlord-core/src/services/document_service.rs
// ============================================================================
//! Document attachments. Paths are recorded as given; files are not copied.

use std::sync::Arc;
use landlord_shared::EntityId;
use tracing::{info, warn};
use validator::Validate;

use crate::domain::{Document, DocumentType, NewDocument};
use crate::error::DomainError;
use crate::repositories::DocumentRepository;

pub struct DocumentService {
    documents: Arc<dyn DocumentRepository>,
}

impl DocumentService {
    pub fn new(documents: Arc<dyn DocumentRepository>) -> Self {
        Self { documents }
    }

    pub async fn list(&self, related_type: Option<DocumentType>) -> Result<Vec<Document>, DomainError> {
        self.documents.list(related_type).await
    }

    pub async fn get(&self, id: EntityId) -> Result<Document, DomainError> {
        self.documents
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("Document", id))
    }

    pub async fn register(&self, input: &NewDocument) -> Result<Document, DomainError> {
        if let Err(e) = input.validate() {
            warn!("Document rejected: {}", e);
            return Err(e.into());
        }
        if !self
            .documents
            .related_exists(input.related_type, input.related_id)
            .await?
        {
            return Err(DomainError::not_found(input.related_type.as_str(), input.related_id));
        }

        let document = self.documents.create(input).await?;
        info!(
            "Document {} attached to {} {}: {}",
            document.id,
            document.related_type.as_str(),
            document.related_id,
            document.file_path
        );
        Ok(document)
    }

    pub async fn update_description(&self, id: EntityId, description: Option<String>) -> Result<Document, DomainError> {
        self.get(id).await?;
        let description = description.map(|d| d.trim().to_string()).filter(|d| !d.is_empty());
        let document = self.documents.update_description(id, description).await?;
        info!("Document {} description updated", id);
        Ok(document)
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        self.get(id).await?;
        self.documents.delete(id).await?;
        info!("Document {} deleted", id);
        Ok(())
    }
}
