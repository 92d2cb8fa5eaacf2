//! Database models for monthly budgets.

use diesel::prelude::*;

use crate::users::UserDB;
use spendwise_core::budgets::{MonthlyBudget, NewMonthlyBudget};

#[derive(Queryable, Identifiable, Associations, Selectable, PartialEq, Debug, Clone)]
#[diesel(belongs_to(UserDB, foreign_key = user_id))]
#[diesel(table_name = crate::schema::monthly_budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MonthlyBudgetDB {
    pub id: i32,
    pub year: i32,
    pub month: i32,
    pub budget: f64,
    pub user_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::monthly_budgets)]
pub struct NewMonthlyBudgetDB {
    pub year: i32,
    pub month: i32,
    pub budget: f64,
    pub user_id: i32,
}

impl From<MonthlyBudgetDB> for MonthlyBudget {
    fn from(db: MonthlyBudgetDB) -> Self {
        Self {
            id: db.id,
            year: db.year,
            month: db.month,
            budget: db.budget,
            user_id: db.user_id,
        }
    }
}

impl NewMonthlyBudgetDB {
    pub fn for_user(user_id: i32, budget: NewMonthlyBudget) -> Self {
        Self {
            year: budget.year,
            month: budget.month,
            budget: budget.budget,
            user_id,
        }
    }
}
