use crate::budgets::budgets_model::{MonthlyBudget, NewMonthlyBudget};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for monthly budget repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    async fn insert_budget(&self, user_id: i32, new_budget: NewMonthlyBudget)
        -> Result<MonthlyBudget>;

    /// First row (lowest id) for the user and period, if any.
    fn find_budget(&self, user_id: i32, year: i32, month: i32) -> Result<Option<MonthlyBudget>>;

    /// Budgets with `(year == current_year AND month <= current_month)` or
    /// `year == current_year - 1`, lowest id first.
    fn get_budgets_for_series(
        &self,
        user_id: i32,
        current_year: i32,
        current_month: i32,
    ) -> Result<Vec<MonthlyBudget>>;
}

/// Trait for monthly budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    /// Creates a budget for an existing user. Fails with NotFound otherwise.
    async fn create_budget(&self, new_budget: NewMonthlyBudget) -> Result<MonthlyBudget>;
}
