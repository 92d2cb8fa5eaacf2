//! Monthly budget domain models.

use serde::{Deserialize, Serialize};

/// Spending ceiling for one user and one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyBudget {
    pub id: i32,
    pub year: i32,
    pub month: i32,
    pub budget: f64,
    pub user_id: i32,
}

/// Input model for creating a budget. A missing or zero `user_id` means the default user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMonthlyBudget {
    pub year: i32,
    pub month: i32,
    pub budget: f64,
    #[serde(default)]
    pub user_id: Option<i32>,
}
