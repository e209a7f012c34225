// ============================================================================
// Landlord Infrastructure - SQLite Property Repository
// File: crates/landlord-infrastructure/src/database/sqlite/property_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use tracing::info;

use landlord_core::domain::{NewProperty, Property, PropertyStatus, PropertyType};
use landlord_core::error::DomainError;
use landlord_core::repositories::PropertyRepository;
use landlord_shared::EntityId;

use super::{db_error, decode, delete_error};

pub struct SqlitePropertyRepository {
    pool: SqlitePool,
}

impl SqlitePropertyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct PropertyRow {
    id: i64,
    name: Option<String>,
    address: String,
    property_type: String,
    size: Option<f64>,
    bedrooms: Option<i64>,
    bathrooms: Option<i64>,
    furnished: bool,
    rent_amount: f64,
    deposit_amount: f64,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<PropertyRow> for Property {
    type Error = DomainError;

    fn try_from(row: PropertyRow) -> Result<Self, Self::Error> {
        Ok(Property {
            id: row.id,
            name: row.name,
            address: row.address,
            property_type: decode("property_type", &row.property_type, PropertyType::from_str)?,
            size: row.size,
            bedrooms: row.bedrooms,
            bathrooms: row.bathrooms,
            furnished: row.furnished,
            rent_amount: row.rent_amount,
            deposit_amount: row.deposit_amount,
            status: decode("status", &row.status, PropertyStatus::from_str)?,
            created_at: row.created_at,
        })
    }
}

const COLUMNS: &str = "id, name, address, property_type, size, bedrooms, bathrooms, furnished, \
                       rent_amount, deposit_amount, status, created_at";

#[async_trait]
impl PropertyRepository for SqlitePropertyRepository {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Property>, DomainError> {
        let row: Option<PropertyRow> =
            sqlx::query_as(&format!("SELECT {} FROM properties WHERE id = ?1", COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("finding property by id", e))?;

        row.map(Property::try_from).transpose()
    }

    async fn list(&self, status: Option<PropertyStatus>) -> Result<Vec<Property>, DomainError> {
        let rows: Vec<PropertyRow> = sqlx::query_as(&format!(
            "SELECT {} FROM properties WHERE (?1 IS NULL OR status = ?1) ORDER BY created_at DESC, id DESC",
            COLUMNS
        ))
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing properties", e))?;

        rows.into_iter().map(Property::try_from).collect()
    }

    async fn create(&self, property: &NewProperty) -> Result<Property, DomainError> {
        let row: PropertyRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO properties (
                name, address, property_type, size, bedrooms, bathrooms,
                furnished, rent_amount, deposit_amount, status
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(&property.name)
        .bind(&property.address)
        .bind(property.property_type.as_str())
        .bind(property.size)
        .bind(property.bedrooms)
        .bind(property.bathrooms)
        .bind(property.furnished)
        .bind(property.rent_amount)
        .bind(property.deposit_amount)
        .bind(property.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("creating property", e))?;

        info!("Property created successfully: {}", row.id);
        row.try_into()
    }

    async fn update(&self, id: EntityId, property: &NewProperty) -> Result<Property, DomainError> {
        let row: Option<PropertyRow> = sqlx::query_as(&format!(
            r#"
            UPDATE properties
            SET
                name = ?2,
                address = ?3,
                property_type = ?4,
                size = ?5,
                bedrooms = ?6,
                bathrooms = ?7,
                furnished = ?8,
                rent_amount = ?9,
                deposit_amount = ?10,
                status = ?11
            WHERE id = ?1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(id)
        .bind(&property.name)
        .bind(&property.address)
        .bind(property.property_type.as_str())
        .bind(property.size)
        .bind(property.bedrooms)
        .bind(property.bathrooms)
        .bind(property.furnished)
        .bind(property.rent_amount)
        .bind(property.deposit_amount)
        .bind(property.status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("updating property", e))?;

        row.ok_or(DomainError::not_found("Property", id))?.try_into()
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM properties WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| delete_error("Property", id, e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Property", id));
        }
        Ok(())
    }
}
