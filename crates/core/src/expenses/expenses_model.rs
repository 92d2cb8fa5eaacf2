//! Expense domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Domain model representing a recorded expense
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: i32,
    pub date: NaiveDate,
    pub category: String,
    pub description: Option<String>,
    pub amount: f64,
    pub user_id: i32,
}

/// Input model for creating or replacing an expense.
///
/// `user_id` is mandatory (and non-zero) on creation and ignored on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub user_id: Option<i32>,
}
