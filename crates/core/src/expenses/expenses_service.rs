use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::expenses_model::{Expense, NewExpense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::users::UserRepositoryTrait;

pub struct ExpenseService {
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
    ) -> Self {
        ExpenseService {
            expense_repository,
            user_repository,
        }
    }

    fn validate_amount(amount: f64) -> Result<()> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::invalid_input("Amount must be positive"));
        }
        Ok(())
    }

    fn expense_not_found() -> Error {
        Error::NotFound("Expense not found".to_string())
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    fn get_expenses(&self) -> Result<Vec<Expense>> {
        self.expense_repository.get_expenses()
    }

    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense> {
        let user_id = new_expense.user_id.filter(|id| *id != 0).ok_or_else(|| {
            Error::Validation(ValidationError::MissingField(
                "User ID is required".to_string(),
            ))
        })?;
        Self::validate_amount(new_expense.amount)?;

        if self.user_repository.get_user_by_id(user_id)?.is_none() {
            return Err(Error::NotFound("User not found".to_string()));
        }

        let expense = self
            .expense_repository
            .insert_expense(user_id, new_expense)
            .await?;
        debug!("Created expense {} for user {}", expense.id, user_id);
        Ok(expense)
    }

    async fn update_expense(&self, expense_id: i32, changes: NewExpense) -> Result<Expense> {
        if self.expense_repository.get_expense(expense_id)?.is_none() {
            return Err(Self::expense_not_found());
        }
        Self::validate_amount(changes.amount)?;
        self.expense_repository
            .update_expense(expense_id, changes)
            .await
    }

    async fn delete_expense(&self, expense_id: i32) -> Result<Expense> {
        let expense = self
            .expense_repository
            .get_expense(expense_id)?
            .ok_or_else(Self::expense_not_found)?;
        self.expense_repository.delete_expense(expense_id).await?;
        Ok(expense)
    }
}
