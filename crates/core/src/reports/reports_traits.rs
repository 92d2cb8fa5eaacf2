use crate::errors::Result;
use crate::reports::reports_model::{
    BudgetStatus, CategoryTotal, MonthlyBreakdown, MonthlySpendVsBudget, PeriodExpenses,
    RecentExpense,
};

/// Read-only aggregation over expenses and budgets.
pub trait ReportServiceTrait: Send + Sync {
    fn total_by_category(&self, category: &str, user_id: i32) -> Result<CategoryTotal>;

    /// Six entries, current month first. Only `last6Months` is accepted.
    fn spend_vs_budget_series(
        &self,
        period: &str,
        username: &str,
    ) -> Result<Vec<MonthlySpendVsBudget>>;

    fn expenses_for_period(&self, period: &str, username: &str) -> Result<PeriodExpenses>;

    fn monthly_breakdown(&self, username: &str) -> Result<MonthlyBreakdown>;

    fn budget_status(&self, year: i32, month: i32, user_id: i32) -> Result<BudgetStatus>;

    fn recent_expenses(&self, username: &str) -> Result<Vec<RecentExpense>>;
}
