use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::budgets_model::{MonthlyBudget, NewMonthlyBudget};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::constants::DEFAULT_USER_ID;
use crate::errors::{Error, Result};
use crate::users::UserRepositoryTrait;

pub struct BudgetService {
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
}

impl BudgetService {
    pub fn new(
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
    ) -> Self {
        BudgetService {
            budget_repository,
            user_repository,
        }
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    async fn create_budget(&self, new_budget: NewMonthlyBudget) -> Result<MonthlyBudget> {
        if !(1..=12).contains(&new_budget.month) {
            return Err(Error::invalid_input("Month must be between 1 and 12"));
        }
        if !new_budget.budget.is_finite() || new_budget.budget < 0.0 {
            return Err(Error::invalid_input("Budget must be positive"));
        }

        let user_id = new_budget
            .user_id
            .filter(|id| *id != 0)
            .unwrap_or(DEFAULT_USER_ID);
        if self.user_repository.get_user_by_id(user_id)?.is_none() {
            return Err(Error::NotFound("User not found".to_string()));
        }

        let budget = self
            .budget_repository
            .insert_budget(user_id, new_budget)
            .await?;
        debug!(
            "Created budget {} for user {} ({}-{:02})",
            budget.id, user_id, budget.year, budget.month
        );
        Ok(budget)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::users::test_support::{user_with_password, MockUserRepository};
    use std::sync::RwLock;

    // ============== Mock Repository ==============

    #[derive(Default)]
    pub(crate) struct MockBudgetRepository {
        pub(crate) budgets: RwLock<Vec<MonthlyBudget>>,
    }

    impl MockBudgetRepository {
        pub(crate) fn with_budgets(budgets: Vec<MonthlyBudget>) -> Self {
            Self {
                budgets: RwLock::new(budgets),
            }
        }
    }

    #[async_trait]
    impl BudgetRepositoryTrait for MockBudgetRepository {
        async fn insert_budget(
            &self,
            user_id: i32,
            new_budget: NewMonthlyBudget,
        ) -> Result<MonthlyBudget> {
            let mut budgets = self.budgets.write().unwrap();
            let budget = MonthlyBudget {
                id: budgets.iter().map(|b| b.id).max().unwrap_or(0) + 1,
                year: new_budget.year,
                month: new_budget.month,
                budget: new_budget.budget,
                user_id,
            };
            budgets.push(budget.clone());
            Ok(budget)
        }

        fn find_budget(
            &self,
            user_id: i32,
            year: i32,
            month: i32,
        ) -> Result<Option<MonthlyBudget>> {
            Ok(self
                .budgets
                .read()
                .unwrap()
                .iter()
                .filter(|b| b.user_id == user_id && b.year == year && b.month == month)
                .min_by_key(|b| b.id)
                .cloned())
        }

        fn get_budgets_for_series(
            &self,
            user_id: i32,
            current_year: i32,
            current_month: i32,
        ) -> Result<Vec<MonthlyBudget>> {
            let mut rows: Vec<MonthlyBudget> = self
                .budgets
                .read()
                .unwrap()
                .iter()
                .filter(|b| {
                    b.user_id == user_id
                        && ((b.year == current_year && b.month <= current_month)
                            || b.year == current_year - 1)
                })
                .cloned()
                .collect();
            rows.sort_by_key(|b| b.id);
            Ok(rows)
        }
    }

    pub(crate) fn budget(id: i32, user_id: i32, year: i32, month: i32, amount: f64) -> MonthlyBudget {
        MonthlyBudget {
            id,
            year,
            month,
            budget: amount,
            user_id,
        }
    }

    fn service() -> (BudgetService, Arc<MockBudgetRepository>) {
        let budgets = Arc::new(MockBudgetRepository::default());
        let users = Arc::new(MockUserRepository::with_users(vec![
            user_with_password(1, "default", "Password123"),
            user_with_password(2, "bob", "Password123"),
        ]));
        (BudgetService::new(budgets.clone(), users), budgets)
    }

    #[tokio::test]
    async fn missing_user_id_uses_default_user() {
        let (service, _) = service();
        for user_id in [None, Some(0)] {
            let created = service
                .create_budget(NewMonthlyBudget {
                    year: 2025,
                    month: 2,
                    budget: 500.0,
                    user_id,
                })
                .await
                .unwrap();
            assert_eq!(created.user_id, DEFAULT_USER_ID);
        }
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let (service, repo) = service();
        let err = service
            .create_budget(NewMonthlyBudget {
                year: 2025,
                month: 2,
                budget: 500.0,
                user_id: Some(99),
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(repo.budgets.read().unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_month_is_rejected() {
        let (service, _) = service();
        for month in [0, 13] {
            let err = service
                .create_budget(NewMonthlyBudget {
                    year: 2025,
                    month,
                    budget: 10.0,
                    user_id: Some(2),
                })
                .await
                .unwrap_err();
            assert!(matches!(err, Error::Validation(_)));
        }
    }

    #[tokio::test]
    async fn duplicates_are_allowed_and_first_wins() {
        let (service, repo) = service();
        for amount in [300.0, 400.0] {
            service
                .create_budget(NewMonthlyBudget {
                    year: 2025,
                    month: 3,
                    budget: amount,
                    user_id: Some(2),
                })
                .await
                .unwrap();
        }
        let found = repo.find_budget(2, 2025, 3).unwrap().unwrap();
        assert_eq!(found.budget, 300.0);
    }
}
