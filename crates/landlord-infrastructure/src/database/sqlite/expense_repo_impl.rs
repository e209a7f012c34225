// ============================================================================
// Landlord Infrastructure - SQLite Expense Repository
// File: crates/landlord-infrastructure/src/database/sqlite/expense_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use tracing::info;

use landlord_core::domain::{Expense, ExpenseCategory, ExpenseSummary, NewExpense, PaidBy};
use landlord_core::error::DomainError;
use landlord_core::repositories::ExpenseRepository;
use landlord_shared::{property_display_name, EntityId};

use super::{db_error, decode, delete_error, write_error};

pub struct SqliteExpenseRepository {
    pool: SqlitePool,
}

impl SqliteExpenseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ExpenseRow {
    id: i64,
    property_id: i64,
    description: String,
    category: String,
    amount: f64,
    date: NaiveDate,
    paid_by: String,
    invoice_number: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ExpenseRow> for Expense {
    type Error = DomainError;

    fn try_from(row: ExpenseRow) -> Result<Self, Self::Error> {
        Ok(Expense {
            id: row.id,
            property_id: row.property_id,
            description: row.description,
            category: decode("category", &row.category, ExpenseCategory::from_str)?,
            amount: row.amount,
            date: row.date,
            paid_by: decode("paid_by", &row.paid_by, PaidBy::from_str)?,
            invoice_number: row.invoice_number,
            notes: row.notes,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ExpenseSummaryRow {
    id: i64,
    property_id: i64,
    property_name: Option<String>,
    description: String,
    category: String,
    amount: f64,
    date: NaiveDate,
    paid_by: String,
}

impl TryFrom<ExpenseSummaryRow> for ExpenseSummary {
    type Error = DomainError;

    fn try_from(row: ExpenseSummaryRow) -> Result<Self, Self::Error> {
        Ok(ExpenseSummary {
            id: row.id,
            property_name: property_display_name(row.property_id, row.property_name.as_deref()),
            description: row.description,
            category: decode("category", &row.category, ExpenseCategory::from_str)?,
            amount: row.amount,
            date: row.date,
            paid_by: decode("paid_by", &row.paid_by, PaidBy::from_str)?,
        })
    }
}

const COLUMNS: &str = "id, property_id, description, category, amount, date, paid_by, \
                       invoice_number, notes, created_at";

#[async_trait]
impl ExpenseRepository for SqliteExpenseRepository {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Expense>, DomainError> {
        let row: Option<ExpenseRow> =
            sqlx::query_as(&format!("SELECT {} FROM expenses WHERE id = ?1", COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("finding expense by id", e))?;

        row.map(Expense::try_from).transpose()
    }

    async fn list(&self, category: Option<ExpenseCategory>) -> Result<Vec<ExpenseSummary>, DomainError> {
        let rows: Vec<ExpenseSummaryRow> = sqlx::query_as(
            r#"
            SELECT
                e.id, p.id AS property_id, p.name AS property_name,
                e.description, e.category, e.amount, e.date, e.paid_by
            FROM expenses e
            JOIN properties p ON p.id = e.property_id
            WHERE (?1 IS NULL OR e.category = ?1)
            ORDER BY e.date DESC, e.id DESC
            "#,
        )
        .bind(category.map(|c| c.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("listing expenses", e))?;

        rows.into_iter().map(ExpenseSummary::try_from).collect()
    }

    async fn create(&self, expense: &NewExpense) -> Result<Expense, DomainError> {
        let row: ExpenseRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO expenses (property_id, description, category, amount, date, paid_by, invoice_number, notes)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(expense.property_id)
        .bind(&expense.description)
        .bind(expense.category.as_str())
        .bind(expense.amount)
        .bind(expense.date)
        .bind(expense.paid_by.as_str())
        .bind(&expense.invoice_number)
        .bind(&expense.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("creating expense", e))?;

        info!("Expense created successfully: {}", row.id);
        row.try_into()
    }

    async fn update(&self, id: EntityId, expense: &NewExpense) -> Result<Expense, DomainError> {
        let row: Option<ExpenseRow> = sqlx::query_as(&format!(
            r#"
            UPDATE expenses
            SET
                property_id = ?2,
                description = ?3,
                category = ?4,
                amount = ?5,
                date = ?6,
                paid_by = ?7,
                invoice_number = ?8,
                notes = ?9
            WHERE id = ?1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(id)
        .bind(expense.property_id)
        .bind(&expense.description)
        .bind(expense.category.as_str())
        .bind(expense.amount)
        .bind(expense.date)
        .bind(expense.paid_by.as_str())
        .bind(&expense.invoice_number)
        .bind(&expense.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error("updating expense", e))?;

        row.ok_or(DomainError::not_found("Expense", id))?.try_into()
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| delete_error("Expense", id, e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Expense", id));
        }
        Ok(())
    }
}
