use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use log::debug;

use super::reports_calculator::{self, period_window, series_start};
use super::reports_model::{
    BudgetStatus, CategoryTotal, DateWindow, ExpensePeriod, MonthlyBreakdown,
    MonthlySpendVsBudget, PeriodExpenses, RecentExpense,
};
use super::reports_traits::ReportServiceTrait;
use crate::budgets::BudgetRepositoryTrait;
use crate::constants::RECENT_EXPENSES_LIMIT;
use crate::errors::{Error, Result};
use crate::expenses::ExpenseRepositoryTrait;
use crate::users::{User, UserRepositoryTrait};
use crate::utils::time_utils::{month_bounds, today_local};

/// Supplies the calendar date the windows are computed from.
pub type TodayProvider = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

pub struct ReportService {
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
    today: TodayProvider,
}

impl ReportService {
    pub fn new(
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
    ) -> Self {
        ReportService {
            expense_repository,
            budget_repository,
            user_repository,
            today: Arc::new(today_local),
        }
    }

    /// Replaces the local-date clock, e.g. to pin "today" in tests.
    pub fn with_today_provider(mut self, today: TodayProvider) -> Self {
        self.today = today;
        self
    }

    fn today(&self) -> NaiveDate {
        (self.today)()
    }

    fn require_user(&self, username: &str) -> Result<User> {
        self.user_repository
            .get_user_by_username(username)?
            .ok_or_else(|| Error::NotFound("User not found".to_string()))
    }
}

impl ReportServiceTrait for ReportService {
    fn total_by_category(&self, category: &str, user_id: i32) -> Result<CategoryTotal> {
        let total_amount = self
            .expense_repository
            .sum_amount_by_category(user_id, category)?;
        Ok(CategoryTotal {
            category: category.to_string(),
            total_amount,
        })
    }

    fn spend_vs_budget_series(
        &self,
        period: &str,
        username: &str,
    ) -> Result<Vec<MonthlySpendVsBudget>> {
        if period != ExpensePeriod::Last6Months.as_str() {
            return Err(Error::invalid_input("Only 'last6Months' is supported."));
        }
        let user = self.require_user(username)?;
        let today = self.today();

        let expenses = self
            .expense_repository
            .get_expenses_since(user.id, series_start(today))?;
        let budgets = self.budget_repository.get_budgets_for_series(
            user.id,
            today.year(),
            today.month() as i32,
        )?;
        debug!(
            "Series for {}: {} expenses, {} candidate budgets",
            username,
            expenses.len(),
            budgets.len()
        );

        Ok(reports_calculator::spend_vs_budget_series(
            today, &expenses, &budgets,
        ))
    }

    fn expenses_for_period(&self, period: &str, username: &str) -> Result<PeriodExpenses> {
        let period: ExpensePeriod = period.parse()?;
        let user = self.require_user(username)?;

        let expenses = match period_window(period, self.today()) {
            DateWindow::On(date) => self.expense_repository.get_expenses_on(user.id, date)?,
            DateWindow::Since(start) => {
                self.expense_repository.get_expenses_since(user.id, start)?
            }
        };
        Ok(PeriodExpenses { expenses })
    }

    fn monthly_breakdown(&self, username: &str) -> Result<MonthlyBreakdown> {
        let user = self.require_user(username)?;
        let today = self.today();
        let (start, end) = month_bounds(today.year(), today.month())?;

        let expenses = self
            .expense_repository
            .get_expenses_between(user.id, start, end)?;
        Ok(reports_calculator::monthly_breakdown(today, &expenses))
    }

    fn budget_status(&self, year: i32, month: i32, user_id: i32) -> Result<BudgetStatus> {
        let calendar_month = u32::try_from(month)
            .map_err(|_| Error::invalid_input("Month must be between 1 and 12"))?;
        let (start, end) = month_bounds(year, calendar_month)?;

        let budget = self
            .budget_repository
            .find_budget(user_id, year, month)?
            .ok_or_else(|| {
                Error::NotFound("Budget not found for the specified month and year".to_string())
            })?;

        let expenses = self
            .expense_repository
            .get_expenses_between(user_id, start, end)?;
        Ok(reports_calculator::budget_status(&budget, &expenses))
    }

    fn recent_expenses(&self, username: &str) -> Result<Vec<RecentExpense>> {
        let user = self.require_user(username)?;
        Ok(self
            .expense_repository
            .get_recent_expenses(user.id, RECENT_EXPENSES_LIMIT)?
            .into_iter()
            .map(RecentExpense::from)
            .collect())
    }
}
