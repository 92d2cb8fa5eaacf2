//! SQLite storage implementation for monthly budgets.

mod model;
mod repository;

pub use model::{MonthlyBudgetDB, NewMonthlyBudgetDB};
pub use repository::BudgetRepository;
