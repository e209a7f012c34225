//! Expense domain entity

use chrono::{DateTime, NaiveDate, Utc};
use landlord_shared::EntityId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::amount::finite_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Maintenance,
    Utility,
    Repair,
    Tax,
    Other,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Maintenance => "Maintenance",
            ExpenseCategory::Utility => "Utility",
            ExpenseCategory::Repair => "Repair",
            ExpenseCategory::Tax => "Tax",
            ExpenseCategory::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Maintenance" => Some(ExpenseCategory::Maintenance),
            "Utility" => Some(ExpenseCategory::Utility),
            "Repair" => Some(ExpenseCategory::Repair),
            "Tax" => Some(ExpenseCategory::Tax),
            "Other" => Some(ExpenseCategory::Other),
            _ => None,
        }
    }
}

/// Who covered the cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaidBy {
    Landlord,
    Tenant,
    Other,
}

impl PaidBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaidBy::Landlord => "Landlord",
            PaidBy::Tenant => "Tenant",
            PaidBy::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Landlord" => Some(PaidBy::Landlord),
            "Tenant" => Some(PaidBy::Tenant),
            "Other" => Some(PaidBy::Other),
            _ => None,
        }
    }
}

impl Default for PaidBy {
    fn default() -> Self {
        PaidBy::Landlord
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: EntityId,
    pub property_id: EntityId,
    pub description: String,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub date: NaiveDate,
    pub paid_by: PaidBy,
    pub invoice_number: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewExpense {
    pub property_id: EntityId,

    #[validate(length(min = 1, max = 500, message = "Description is required"))]
    pub description: String,

    pub category: ExpenseCategory,

    #[validate(range(min = 0.0, message = "Amount cannot be negative"), custom(function = "finite_amount"))]
    pub amount: f64,

    pub date: NaiveDate,
    pub paid_by: PaidBy,
    pub invoice_number: Option<String>,
    pub notes: Option<String>,
}

/// Expense joined with its property display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    pub id: EntityId,
    pub property_name: String,
    pub description: String,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub date: NaiveDate,
    pub paid_by: PaidBy,
}
