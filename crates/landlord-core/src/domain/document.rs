//! Document attachment metadata

use chrono::{DateTime, Utc};
use landlord_shared::EntityId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Kind of record a document is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    Property,
    Tenant,
    Lease,
    Payment,
    Expense,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Property => "Property",
            DocumentType::Tenant => "Tenant",
            DocumentType::Lease => "Lease",
            DocumentType::Payment => "Payment",
            DocumentType::Expense => "Expense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Property" => Some(DocumentType::Property),
            "Tenant" => Some(DocumentType::Tenant),
            "Lease" => Some(DocumentType::Lease),
            "Payment" => Some(DocumentType::Payment),
            "Expense" => Some(DocumentType::Expense),
            _ => None,
        }
    }

    /// Table holding the related record.
    pub fn table_name(&self) -> &'static str {
        match self {
            DocumentType::Property => "properties",
            DocumentType::Tenant => "tenants",
            DocumentType::Lease => "leases",
            DocumentType::Payment => "rent_payments",
            DocumentType::Expense => "expenses",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: EntityId,
    pub related_type: DocumentType,
    pub related_id: EntityId,
    pub file_path: String,
    pub description: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewDocument {
    pub related_type: DocumentType,
    pub related_id: EntityId,

    #[validate(length(min = 1, message = "File path is required"))]
    pub file_path: String,

    #[validate(length(max = 1000, message = "Description too long"))]
    pub description: Option<String>,
}
