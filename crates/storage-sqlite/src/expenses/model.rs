//! Database models for expenses.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::users::UserDB;
use spendwise_core::expenses::{Expense, NewExpense};

#[derive(Queryable, Identifiable, Associations, Selectable, PartialEq, Debug, Clone)]
#[diesel(belongs_to(UserDB, foreign_key = user_id))]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExpenseDB {
    pub id: i32,
    pub date: NaiveDate,
    pub category: String,
    pub description: Option<String>,
    pub amount: f64,
    pub user_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
pub struct NewExpenseDB {
    pub date: NaiveDate,
    pub category: String,
    pub description: Option<String>,
    pub amount: f64,
    pub user_id: i32,
}

/// Editable columns. A `None` description clears the stored one.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(treat_none_as_null = true)]
pub struct ExpenseChangesDB {
    pub date: NaiveDate,
    pub category: String,
    pub description: Option<String>,
    pub amount: f64,
}

impl From<ExpenseDB> for Expense {
    fn from(db: ExpenseDB) -> Self {
        Self {
            id: db.id,
            date: db.date,
            category: db.category,
            description: db.description,
            amount: db.amount,
            user_id: db.user_id,
        }
    }
}

impl NewExpenseDB {
    pub fn for_user(user_id: i32, expense: NewExpense) -> Self {
        Self {
            date: expense.date,
            category: expense.category,
            description: expense.description,
            amount: expense.amount,
            user_id,
        }
    }
}

impl From<NewExpense> for ExpenseChangesDB {
    fn from(changes: NewExpense) -> Self {
        Self {
            date: changes.date,
            category: changes.category,
            description: changes.description,
            amount: changes.amount,
        }
    }
}
