//! Tenant domain entity

use chrono::{DateTime, Utc};
use landlord_shared::EntityId;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: EntityId,
    pub name: String,
    pub property_id: Option<EntityId>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub national_id: Option<String>,
    pub emergency_contact: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewTenant {
    #[validate(length(min = 1, max = 200, message = "Tenant name is required"))]
    pub name: String,

    pub property_id: Option<EntityId>,

    #[validate(length(max = 50))]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(length(max = 100))]
    pub national_id: Option<String>,

    pub emergency_contact: Option<String>,
    pub notes: Option<String>,
}

/// Tenant joined with the display name of the property they live in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantSummary {
    pub id: EntityId,
    pub name: String,
    pub property_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validated_when_present() {
        let mut tenant = NewTenant {
            name: "John Doe".to_string(),
            property_id: None,
            phone: Some("555-1234".to_string()),
            email: Some("john@example.com".to_string()),
            national_id: None,
            emergency_contact: Some("Jane Doe - 555-5678".to_string()),
            notes: None,
        };
        assert!(tenant.validate().is_ok());

        tenant.email = Some("not-an-email".to_string());
        assert!(tenant.validate().is_err());

        tenant.email = None;
        assert!(tenant.validate().is_ok());
    }
}
