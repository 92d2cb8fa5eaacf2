//! Reports module - spending aggregation over expenses and budgets.

pub mod reports_calculator;
mod reports_model;
mod reports_service;
mod reports_traits;

pub use reports_model::{
    BudgetStatus, CategoryTotal, DateWindow, ExpensePeriod, MonthlyBreakdown,
    MonthlySpendVsBudget, PeriodExpenses, RecentExpense,
};
pub use reports_service::{ReportService, TodayProvider};
pub use reports_traits::ReportServiceTrait;
