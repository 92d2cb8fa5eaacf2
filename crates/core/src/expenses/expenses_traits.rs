use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, NewExpense};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for expense repository operations
///
/// List queries scoped to a user return rows newest first unless noted.
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    fn get_expense(&self, expense_id: i32) -> Result<Option<Expense>>;
    fn get_expenses(&self) -> Result<Vec<Expense>>;
    async fn insert_expense(&self, user_id: i32, new_expense: NewExpense) -> Result<Expense>;
    async fn update_expense(&self, expense_id: i32, changes: NewExpense) -> Result<Expense>;
    async fn delete_expense(&self, expense_id: i32) -> Result<usize>;

    /// Sum of all amounts for the user in `category`; 0.0 when there are none.
    fn sum_amount_by_category(&self, user_id: i32, category: &str) -> Result<f64>;
    fn get_expenses_on(&self, user_id: i32, date: NaiveDate) -> Result<Vec<Expense>>;
    fn get_expenses_since(&self, user_id: i32, start: NaiveDate) -> Result<Vec<Expense>>;
    /// Inclusive on both ends.
    fn get_expenses_between(
        &self,
        user_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>>;
    /// The `limit` most recently inserted rows, highest id first.
    fn get_recent_expenses(&self, user_id: i32, limit: i64) -> Result<Vec<Expense>>;
}

/// Trait for expense service operations
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    fn get_expenses(&self) -> Result<Vec<Expense>>;
    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense>;
    async fn update_expense(&self, expense_id: i32, changes: NewExpense) -> Result<Expense>;
    /// Returns the row as it was before deletion.
    async fn delete_expense(&self, expense_id: i32) -> Result<Expense>;
}
