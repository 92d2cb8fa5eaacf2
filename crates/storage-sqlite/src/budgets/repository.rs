use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use super::model::{MonthlyBudgetDB, NewMonthlyBudgetDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::monthly_budgets;
use spendwise_core::budgets::{BudgetRepositoryTrait, MonthlyBudget, NewMonthlyBudget};
use spendwise_core::Result;

pub struct BudgetRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        BudgetRepository { pool, writer }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    async fn insert_budget(
        &self,
        user_id: i32,
        new_budget: NewMonthlyBudget,
    ) -> Result<MonthlyBudget> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<MonthlyBudget> {
                let row = NewMonthlyBudgetDB::for_user(user_id, new_budget);
                let inserted = diesel::insert_into(monthly_budgets::table)
                    .values(&row)
                    .returning(MonthlyBudgetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(MonthlyBudget::from(inserted))
            })
            .await
    }

    fn find_budget(&self, user_id: i32, year: i32, month: i32) -> Result<Option<MonthlyBudget>> {
        let mut conn = get_connection(&self.pool)?;
        let row = monthly_budgets::table
            .filter(monthly_budgets::user_id.eq(user_id))
            .filter(monthly_budgets::year.eq(year))
            .filter(monthly_budgets::month.eq(month))
            .order(monthly_budgets::id.asc())
            .select(MonthlyBudgetDB::as_select())
            .first::<MonthlyBudgetDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(MonthlyBudget::from))
    }

    /// This year up to the current month, plus every month of last year.
    fn get_budgets_for_series(
        &self,
        user_id: i32,
        current_year: i32,
        current_month: i32,
    ) -> Result<Vec<MonthlyBudget>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = monthly_budgets::table
            .filter(monthly_budgets::user_id.eq(user_id))
            .filter(
                monthly_budgets::year
                    .eq(current_year)
                    .and(monthly_budgets::month.le(current_month))
                    .or(monthly_budgets::year.eq(current_year - 1)),
            )
            .order(monthly_budgets::id.asc())
            .select(MonthlyBudgetDB::as_select())
            .load::<MonthlyBudgetDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(MonthlyBudget::from).collect())
    }
}
