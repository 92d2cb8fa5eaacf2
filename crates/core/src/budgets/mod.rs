//! Monthly budgets module - domain models, services, and traits.

mod budgets_model;
mod budgets_service;
mod budgets_traits;

pub use budgets_model::{MonthlyBudget, NewMonthlyBudget};
pub use budgets_service::BudgetService;
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};

#[cfg(test)]
pub(crate) use budgets_service::tests as test_support;
