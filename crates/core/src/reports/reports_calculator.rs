//! Pure aggregation functions behind the reporting endpoints.
//!
//! Everything here works on rows that were already loaded and on an explicit
//! `today`, so the date arithmetic can be tested without a store or a clock.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, Duration, NaiveDate};

use super::reports_model::{
    BudgetStatus, DateWindow, ExpensePeriod, MonthlyBreakdown, MonthlySpendVsBudget,
};
use crate::budgets::MonthlyBudget;
use crate::constants::{LAST_6_MONTHS_LOOKBACK_DAYS, LAST_YEAR_LOOKBACK_DAYS, SERIES_MONTHS};
use crate::expenses::Expense;
use crate::utils::time_utils::{first_of_month, month_label, month_label_of, months_before};

/// Date filter for a listing period.
///
/// The multi-month windows count 30-day months back from the first of the
/// current month, so they are close to, but not exactly, calendar months.
pub fn period_window(period: ExpensePeriod, today: NaiveDate) -> DateWindow {
    let month_start = first_of_month(today);
    match period {
        ExpensePeriod::CurrentDay => DateWindow::On(today),
        ExpensePeriod::CurrentMonth => DateWindow::Since(month_start),
        ExpensePeriod::Last6Months => {
            DateWindow::Since(month_start - Duration::days(LAST_6_MONTHS_LOOKBACK_DAYS))
        }
        ExpensePeriod::LastYear => {
            DateWindow::Since(month_start - Duration::days(LAST_YEAR_LOOKBACK_DAYS))
        }
    }
}

/// First day of the oldest month in the spend-vs-budget series.
pub fn series_start(today: NaiveDate) -> NaiveDate {
    months_before(first_of_month(today), SERIES_MONTHS - 1)
}

/// The series labels, current month first.
pub fn series_labels(today: NaiveDate) -> Vec<String> {
    let month_start = first_of_month(today);
    (0..SERIES_MONTHS)
        .map(|offset| month_label_of(months_before(month_start, offset)))
        .collect()
}

/// Builds the six-month spend-vs-budget series.
///
/// `budgets` must be ordered by id; when a month has several rows the first
/// one wins. Months without expenses or budgets report 0.0.
pub fn spend_vs_budget_series(
    today: NaiveDate,
    expenses: &[Expense],
    budgets: &[MonthlyBudget],
) -> Vec<MonthlySpendVsBudget> {
    let mut spent_by_month: HashMap<String, f64> = HashMap::new();
    for expense in expenses {
        *spent_by_month
            .entry(month_label_of(expense.date))
            .or_insert(0.0) += expense.amount;
    }

    let mut budget_by_month: HashMap<String, f64> = HashMap::new();
    for budget in budgets {
        let Ok(month) = u32::try_from(budget.month) else {
            continue;
        };
        budget_by_month
            .entry(month_label(budget.year, month))
            .or_insert(budget.budget);
    }

    series_labels(today)
        .into_iter()
        .map(|label| MonthlySpendVsBudget {
            spent: spent_by_month.get(&label).copied().unwrap_or(0.0),
            budget: budget_by_month.get(&label).copied().unwrap_or(0.0),
            month: label,
        })
        .collect()
}

/// Total and per-category sums for the calendar month containing `today`.
///
/// Rows from other months are ignored; categories without spend are absent.
pub fn monthly_breakdown(today: NaiveDate, expenses: &[Expense]) -> MonthlyBreakdown {
    let mut total = 0.0;
    let mut breakdown: BTreeMap<String, f64> = BTreeMap::new();

    for expense in expenses
        .iter()
        .filter(|e| e.date.year() == today.year() && e.date.month() == today.month())
    {
        total += expense.amount;
        *breakdown.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }

    MonthlyBreakdown { total, breakdown }
}

/// Compares one month's budget with what was spent that month.
pub fn budget_status(budget: &MonthlyBudget, month_expenses: &[Expense]) -> BudgetStatus {
    let total_expenses: f64 = month_expenses.iter().map(|e| e.amount).sum();
    BudgetStatus {
        year: budget.year,
        month: budget.month,
        monthly_budget: budget.budget,
        total_expenses,
        remaining_budget: budget.budget - total_expenses,
    }
}
