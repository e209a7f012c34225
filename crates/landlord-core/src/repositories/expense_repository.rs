//! Expense repository trait (port)

use async_trait::async_trait;
use landlord_shared::EntityId;
use crate::domain::{Expense, ExpenseCategory, ExpenseSummary, NewExpense};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Expense>, DomainError>;
    async fn list(&self, category: Option<ExpenseCategory>) -> Result<Vec<ExpenseSummary>, DomainError>;
    async fn create(&self, expense: &NewExpense) -> Result<Expense, DomainError>;
    async fn update(&self, id: EntityId, expense: &NewExpense) -> Result<Expense, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
}
