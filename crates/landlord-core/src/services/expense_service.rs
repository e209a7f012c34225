// ============================================================================
// Landlord Core - Expense Service
// File: crates/landlord-core/src/services/expense_service.rs
// ============================================================================

use std::sync::Arc;
use landlord_shared::EntityId;
use tracing::{info, warn};
use validator::Validate;

use crate::domain::{Expense, ExpenseCategory, ExpenseSummary, NewExpense};
use crate::error::DomainError;
use crate::repositories::{ExpenseRepository, PropertyRepository};

pub struct ExpenseService {
    expenses: Arc<dyn ExpenseRepository>,
    properties: Arc<dyn PropertyRepository>,
}

impl ExpenseService {
    pub fn new(expenses: Arc<dyn ExpenseRepository>, properties: Arc<dyn PropertyRepository>) -> Self {
        Self { expenses, properties }
    }

    pub async fn list(&self, category: Option<ExpenseCategory>) -> Result<Vec<ExpenseSummary>, DomainError> {
        self.expenses.list(category).await
    }

    pub async fn get(&self, id: EntityId) -> Result<Expense, DomainError> {
        self.expenses
            .find_by_id(id)
            .await?
            .ok_or(DomainError::not_found("Expense", id))
    }

    pub async fn create(&self, input: &NewExpense) -> Result<Expense, DomainError> {
        self.check(input).await?;
        let expense = self.expenses.create(input).await?;
        info!(
            "Expense {} recorded: {:.2} ({}) for property {}",
            expense.id,
            expense.amount,
            expense.category.as_str(),
            expense.property_id
        );
        Ok(expense)
    }

    pub async fn update(&self, id: EntityId, input: &NewExpense) -> Result<Expense, DomainError> {
        self.get(id).await?;
        self.check(input).await?;
        let expense = self.expenses.update(id, input).await?;
        info!("Expense {} updated", id);
        Ok(expense)
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        self.get(id).await?;
        self.expenses.delete(id).await?;
        info!("Expense {} deleted", id);
        Ok(())
    }

    async fn check(&self, input: &NewExpense) -> Result<(), DomainError> {
        if let Err(e) = input.validate() {
            warn!("Expense rejected: {}", e);
            return Err(e.into());
        }
        if self.properties.find_by_id(input.property_id).await?.is_none() {
            return Err(DomainError::not_found("Property", input.property_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PaidBy;
    use crate::repositories::{MockExpenseRepository, MockPropertyRepository};
    use chrono::NaiveDate;

    fn input(amount: f64) -> NewExpense {
        NewExpense {
            property_id: 2,
            description: "Boiler service".to_string(),
            category: ExpenseCategory::Maintenance,
            amount,
            date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            paid_by: PaidBy::Landlord,
            invoice_number: Some("INV-114".to_string()),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_negative_amount_rejected_before_lookup() {
        let mut expenses = MockExpenseRepository::new();
        expenses.expect_create().never();
        let mut properties = MockPropertyRepository::new();
        properties.expect_find_by_id().never();
        let svc = ExpenseService::new(Arc::new(expenses), Arc::new(properties));

        let err = svc.create(&input(-20.0)).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_unknown_property_rejected() {
        let mut expenses = MockExpenseRepository::new();
        expenses.expect_create().never();
        let mut properties = MockPropertyRepository::new();
        properties.expect_find_by_id().returning(|_| Ok(None));
        let svc = ExpenseService::new(Arc::new(expenses), Arc::new(properties));

        let err = svc.create(&input(120.0)).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Property", id: 2 }));
    }

    #[tokio::test]
    async fn test_update_missing_expense() {
        let mut expenses = MockExpenseRepository::new();
        expenses.expect_find_by_id().returning(|_| Ok(None));
        expenses.expect_update().never();
        let svc = ExpenseService::new(Arc::new(expenses), Arc::new(MockPropertyRepository::new()));

        let err = svc.update(31, &input(120.0)).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Expense", id: 31 }));
    }
}
