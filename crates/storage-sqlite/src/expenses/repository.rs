use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::dsl::sum;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use super::model::{ExpenseChangesDB, ExpenseDB, NewExpenseDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::expenses;
use spendwise_core::expenses::{Expense, ExpenseRepositoryTrait, NewExpense};
use spendwise_core::Result;

pub struct ExpenseRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl ExpenseRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        ExpenseRepository { pool, writer }
    }

    fn load(rows: Vec<ExpenseDB>) -> Vec<Expense> {
        rows.into_iter().map(Expense::from).collect()
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    fn get_expense(&self, expense_id: i32) -> Result<Option<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let row = expenses::table
            .find(expense_id)
            .select(ExpenseDB::as_select())
            .first::<ExpenseDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Expense::from))
    }

    fn get_expenses(&self) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expenses::table
            .select(ExpenseDB::as_select())
            .order(expenses::id.asc())
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Self::load(rows))
    }

    async fn insert_expense(&self, user_id: i32, new_expense: NewExpense) -> Result<Expense> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let row = NewExpenseDB::for_user(user_id, new_expense);
                let inserted = diesel::insert_into(expenses::table)
                    .values(&row)
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Expense::from(inserted))
            })
            .await
    }

    async fn update_expense(&self, expense_id: i32, changes: NewExpense) -> Result<Expense> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let changes: ExpenseChangesDB = changes.into();
                let updated = diesel::update(expenses::table.find(expense_id))
                    .set(&changes)
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Expense::from(updated))
            })
            .await
    }

    async fn delete_expense(&self, expense_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(expenses::table.find(expense_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn sum_amount_by_category(&self, user_id: i32, category: &str) -> Result<f64> {
        let mut conn = get_connection(&self.pool)?;
        let total: Option<f64> = expenses::table
            .filter(expenses::user_id.eq(user_id))
            .filter(expenses::category.eq(category))
            .select(sum(expenses::amount))
            .first(&mut conn)
            .into_core()?;
        Ok(total.unwrap_or(0.0))
    }

    fn get_expenses_on(&self, user_id: i32, date: NaiveDate) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expenses::table
            .filter(expenses::user_id.eq(user_id))
            .filter(expenses::date.eq(date))
            .select(ExpenseDB::as_select())
            .order((expenses::date.desc(), expenses::id.desc()))
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Self::load(rows))
    }

    fn get_expenses_since(&self, user_id: i32, start: NaiveDate) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expenses::table
            .filter(expenses::user_id.eq(user_id))
            .filter(expenses::date.ge(start))
            .select(ExpenseDB::as_select())
            .order((expenses::date.desc(), expenses::id.desc()))
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Self::load(rows))
    }

    fn get_expenses_between(
        &self,
        user_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expenses::table
            .filter(expenses::user_id.eq(user_id))
            .filter(expenses::date.between(start, end))
            .select(ExpenseDB::as_select())
            .order((expenses::date.desc(), expenses::id.desc()))
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Self::load(rows))
    }

    fn get_recent_expenses(&self, user_id: i32, limit: i64) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expenses::table
            .filter(expenses::user_id.eq(user_id))
            .select(ExpenseDB::as_select())
            .order(expenses::id.desc())
            .limit(limit)
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Self::load(rows))
    }
}
