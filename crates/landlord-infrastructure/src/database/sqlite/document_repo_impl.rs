// ============================================================================
// Landlord Infrastructure - SQLite Document Repository
// File: crates/landlord-infrastructure/src/database/sqlite/document_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use tracing::info;

use landlord_core::domain::{Document, DocumentType, NewDocument};
use landlord_core::error::DomainError;
use landlord_core::repositories::DocumentRepository;
use landlord_shared::EntityId;

use super::{db_error, decode};

pub struct SqliteDocumentRepository {
    pool: SqlitePool,
}

impl SqliteDocumentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: i64,
    related_type: String,
    related_id: i64,
    file_path: String,
    description: Option<String>,
    uploaded_at: DateTime<Utc>,
}

impl TryFrom<DocumentRow> for Document {
    type Error = DomainError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        Ok(Document {
            id: row.id,
            related_type: decode("related_type", &row.related_type, DocumentType::from_str)?,
            related_id: row.related_id,
            file_path: row.file_path,
            description: row.description,
            uploaded_at: row.uploaded_at,
        })
    }
}

const COLUMNS: &str = "id, related_type, related_id, file_path, description, uploaded_at";

#[async_trait]
impl DocumentRepository for SqliteDocumentRepository {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Document>, DomainError> {
        let row: Option<DocumentRow> =
            sqlx::query_as(&format!("SELECT {} FROM documents WHERE id = ?1", COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("finding document by id", e))?;

        row.map(Document::try_from).transpose()
    }

    async fn list(&self, related_type: Option<DocumentType>) -> Result<Vec<Document>, DomainError> {
        let rows: Vec<DocumentRow> = sqlx::query_as(&format!(
            "SELECT {} FROM documents WHERE (?1 IS NULL OR related_type = ?1) \
             ORDER BY uploaded_at DESC, id DESC",
            COLUMNS
        ))
        .bind(related_type.map(|t| t.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing documents", e))?;

        rows.into_iter().map(Document::try_from).collect()
    }

    async fn related_exists(&self, related_type: DocumentType, related_id: EntityId) -> Result<bool, DomainError> {
        // table_name() only yields fixed table names
        let exists: bool = sqlx::query_scalar(&format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE id = ?1)",
            related_type.table_name()
        ))
        .bind(related_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("checking document target", e))?;

        Ok(exists)
    }

    async fn create(&self, document: &NewDocument) -> Result<Document, DomainError> {
        let row: DocumentRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO documents (related_type, related_id, file_path, description)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(document.related_type.as_str())
        .bind(document.related_id)
        .bind(&document.file_path)
        .bind(&document.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("creating document", e))?;

        info!("Document created successfully: {}", row.id);
        row.try_into()
    }

    async fn update_description(&self, id: EntityId, description: Option<String>) -> Result<Document, DomainError> {
        let row: Option<DocumentRow> = sqlx::query_as(&format!(
            "UPDATE documents SET description = ?2 WHERE id = ?1 RETURNING {}",
            COLUMNS
        ))
        .bind(id)
        .bind(description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("updating document description", e))?;

        row.ok_or(DomainError::not_found("Document", id))?.try_into()
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM documents WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("deleting document", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Document", id));
        }
        Ok(())
    }
}
