//! Property domain entity

use chrono::{DateTime, Utc};
use landlord_shared::{property_display_name, EntityId};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::amount::finite_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    Apartment,
    House,
    Shop,
    Office,
    Other,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Shop => "Shop",
            PropertyType::Office => "Office",
            PropertyType::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Apartment" => Some(PropertyType::Apartment),
            "House" => Some(PropertyType::House),
            "Shop" => Some(PropertyType::Shop),
            "Office" => Some(PropertyType::Office),
            "Other" => Some(PropertyType::Other),
            _ => None,
        }
    }
}

impl Default for PropertyType {
    fn default() -> Self {
        PropertyType::Other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyStatus {
    Vacant,
    Occupied,
    UnderMaintenance,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Vacant => "Vacant",
            PropertyStatus::Occupied => "Occupied",
            PropertyStatus::UnderMaintenance => "Under Maintenance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Vacant" => Some(PropertyStatus::Vacant),
            "Occupied" => Some(PropertyStatus::Occupied),
            "Under Maintenance" => Some(PropertyStatus::UnderMaintenance),
            _ => None,
        }
    }
}

impl Default for PropertyStatus {
    fn default() -> Self {
        PropertyStatus::Vacant
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: EntityId,
    pub name: Option<String>,
    pub address: String,
    pub property_type: PropertyType,
    pub size: Option<f64>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    pub furnished: bool,
    pub rent_amount: f64,
    pub deposit_amount: f64,
    pub status: PropertyStatus,
    pub created_at: DateTime<Utc>,
}

impl Property {
    pub fn display_name(&self) -> String {
        property_display_name(self.id, self.name.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewProperty {
    #[validate(length(max = 200, message = "Property name too long"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 500, message = "Address is required"))]
    pub address: String,

    pub property_type: PropertyType,

    #[validate(range(min = 0.0, message = "Size cannot be negative"), custom(function = "finite_amount"))]
    pub size: Option<f64>,

    #[validate(range(min = 0, max = 100))]
    pub bedrooms: Option<i64>,

    #[validate(range(min = 0, max = 100))]
    pub bathrooms: Option<i64>,

    pub furnished: bool,

    #[validate(range(min = 0.0, message = "Rent amount cannot be negative"), custom(function = "finite_amount"))]
    pub rent_amount: f64,

    #[validate(range(min = 0.0, message = "Deposit amount cannot be negative"), custom(function = "finite_amount"))]
    pub deposit_amount: f64,

    pub status: PropertyStatus,
}

impl NewProperty {
    pub fn normalized(mut self) -> Self {
        self.name = self.name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
        self.address = self.address.trim().to_string();
        self
    }
}
