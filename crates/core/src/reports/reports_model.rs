//! Read models produced by the reporting engine.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::expenses::Expense;

/// Named date window for expense listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExpensePeriod {
    CurrentDay,
    CurrentMonth,
    Last6Months,
    LastYear,
}

impl ExpensePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpensePeriod::CurrentDay => "currentDay",
            ExpensePeriod::CurrentMonth => "currentMonth",
            ExpensePeriod::Last6Months => "last6Months",
            ExpensePeriod::LastYear => "lastYear",
        }
    }
}

impl fmt::Display for ExpensePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpensePeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "currentDay" => Ok(ExpensePeriod::CurrentDay),
            "currentMonth" => Ok(ExpensePeriod::CurrentMonth),
            "last6Months" => Ok(ExpensePeriod::Last6Months),
            "lastYear" => Ok(ExpensePeriod::LastYear),
            _ => Err(Error::invalid_input("Invalid period")),
        }
    }
}

/// Resolved filter for a period token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateWindow {
    /// Exactly this date.
    On(NaiveDate),
    /// This date or later, with no upper bound.
    Since(NaiveDate),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total_amount: f64,
}

/// One point of the spend-vs-budget series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlySpendVsBudget {
    /// "YYYY-MM"
    pub month: String,
    pub spent: f64,
    pub budget: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeriodExpenses {
    pub expenses: Vec<Expense>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyBreakdown {
    pub total: f64,
    pub breakdown: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetStatus {
    pub year: i32,
    pub month: i32,
    pub monthly_budget: f64,
    pub total_expenses: f64,
    /// Budget minus spend; negative when overspent.
    pub remaining_budget: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentExpense {
    pub date: NaiveDate,
    pub category: String,
    pub description: Option<String>,
    pub amount: f64,
}

impl From<Expense> for RecentExpense {
    fn from(e: Expense) -> Self {
        Self {
            date: e.date,
            category: e.category,
            description: e.description,
            amount: e.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_tokens_parse_and_serialize_alike() {
        for token in ["currentDay", "currentMonth", "last6Months", "lastYear"] {
            let period: ExpensePeriod = token.parse().unwrap();
            assert_eq!(period.to_string(), token);
            assert_eq!(serde_json::to_value(period).unwrap(), token);
        }
        assert!("LastYear".parse::<ExpensePeriod>().is_err());
    }

    #[test]
    fn recent_expense_drops_ids() {
        let expense = Expense {
            id: 9,
            date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            category: "food".into(),
            description: None,
            amount: 3.0,
            user_id: 1,
        };
        let json = serde_json::to_value(RecentExpense::from(expense)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "date": "2025-02-01",
                "category": "food",
                "description": null,
                "amount": 3.0,
            })
        );
    }
}
