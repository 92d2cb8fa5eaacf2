mod common;

use chrono::{Duration, NaiveDate};
use spendwise_core::budgets::{BudgetRepositoryTrait, NewMonthlyBudget};
use spendwise_core::expenses::{ExpenseRepositoryTrait, NewExpense};
use spendwise_core::recovery::{RecoveryCode, RecoveryCodeRepositoryTrait};
use spendwise_core::users::{NewUserRecord, ProfileUpdate, UserRepositoryTrait};
use spendwise_core::Error;
use spendwise_storage_sqlite::{
    BudgetRepository, DatabaseError, ExpenseRepository, RecoveryCodeRepository, UserRepository,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn record(username: &str) -> NewUserRecord {
    NewUserRecord {
        id: None,
        username: username.to_string(),
        fullname: format!("{username} fullname"),
        email: format!("{username}@test.com"),
        password_hash: "hash".to_string(),
    }
}

fn spend(date: NaiveDate, category: &str, amount: f64) -> NewExpense {
    NewExpense {
        date,
        category: category.to_string(),
        description: Some("note".to_string()),
        amount,
        user_id: None,
    }
}

fn budget(year: i32, month: i32, amount: f64) -> NewMonthlyBudget {
    NewMonthlyBudget {
        year,
        month,
        budget: amount,
        user_id: None,
    }
}

struct Repos {
    _db: common::TestDb,
    users: UserRepository,
    expenses: ExpenseRepository,
    budgets: BudgetRepository,
    codes: RecoveryCodeRepository,
}

fn repos() -> Repos {
    let db = common::setup();
    Repos {
        users: UserRepository::new(db.pool.clone(), db.writer.clone()),
        expenses: ExpenseRepository::new(db.pool.clone(), db.writer.clone()),
        budgets: BudgetRepository::new(db.pool.clone(), db.writer.clone()),
        codes: RecoveryCodeRepository::new(db.pool.clone(), db.writer.clone()),
        _db: db,
    }
}

#[tokio::test]
async fn users_insert_lookup_and_unique_constraints() {
    let r = repos();
    let alice = r.users.insert_user(record("alice")).await.unwrap();
    assert!(alice.id > 0);

    assert_eq!(
        r.users.get_user_by_username("alice").unwrap().unwrap().id,
        alice.id
    );
    assert_eq!(
        r.users.get_user_by_email("alice@test.com").unwrap().unwrap().id,
        alice.id
    );
    assert!(r.users.get_user_by_id(alice.id + 100).unwrap().is_none());

    let err = r.users.insert_user(record("alice")).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Database(DatabaseError::UniqueViolation(_))
    ));
}

#[tokio::test]
async fn users_with_explicit_id_and_profile_update() {
    let r = repos();
    let mut placeholder = record("default_user_7");
    placeholder.id = Some(7);
    let user = r.users.insert_user(placeholder).await.unwrap();
    assert_eq!(user.id, 7);

    let updated = r
        .users
        .update_profile(
            7,
            ProfileUpdate {
                fullname: "Seven".into(),
                username: "seven".into(),
                email: "seven@test.com".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.username, "seven");

    r.users
        .update_password_hash(7, "new-hash".into())
        .await
        .unwrap();
    assert_eq!(
        r.users.get_user_by_id(7).unwrap().unwrap().password_hash,
        "new-hash"
    );
}

#[tokio::test]
async fn expense_queries_filter_by_user_and_date() {
    let r = repos();
    let alice = r.users.insert_user(record("alice")).await.unwrap();
    let bob = r.users.insert_user(record("bob")).await.unwrap();

    r.expenses
        .insert_expense(alice.id, spend(d(2025, 2, 1), "food", 10.0))
        .await
        .unwrap();
    r.expenses
        .insert_expense(alice.id, spend(d(2025, 2, 10), "food", 5.5))
        .await
        .unwrap();
    r.expenses
        .insert_expense(alice.id, spend(d(2025, 1, 31), "rent", 700.0))
        .await
        .unwrap();
    r.expenses
        .insert_expense(bob.id, spend(d(2025, 2, 10), "food", 99.0))
        .await
        .unwrap();

    assert_eq!(
        r.expenses.sum_amount_by_category(alice.id, "food").unwrap(),
        15.5
    );
    assert_eq!(
        r.expenses.sum_amount_by_category(alice.id, "travel").unwrap(),
        0.0
    );

    let on = r.expenses.get_expenses_on(alice.id, d(2025, 2, 10)).unwrap();
    assert_eq!(on.len(), 1);

    let since = r.expenses.get_expenses_since(alice.id, d(2025, 2, 1)).unwrap();
    let dates: Vec<NaiveDate> = since.iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![d(2025, 2, 10), d(2025, 2, 1)]);

    let february = r
        .expenses
        .get_expenses_between(alice.id, d(2025, 2, 1), d(2025, 2, 28))
        .unwrap();
    assert_eq!(february.len(), 2);

    let recent = r.expenses.get_recent_expenses(alice.id, 2).unwrap();
    assert_eq!(recent.len(), 2);
    assert!(recent[0].id > recent[1].id);
    assert_eq!(recent[0].category, "rent");
}

#[tokio::test]
async fn expense_update_and_delete() {
    let r = repos();
    let alice = r.users.insert_user(record("alice")).await.unwrap();
    let created = r
        .expenses
        .insert_expense(alice.id, spend(d(2025, 2, 1), "food", 10.0))
        .await
        .unwrap();

    let mut changes = spend(d(2025, 2, 2), "groceries", 12.0);
    changes.description = None;
    let updated = r.expenses.update_expense(created.id, changes).await.unwrap();
    assert_eq!(updated.category, "groceries");
    assert_eq!(updated.description, None);
    assert_eq!(updated.user_id, alice.id);

    let missing = r
        .expenses
        .update_expense(created.id + 1, spend(d(2025, 2, 2), "x", 1.0))
        .await
        .unwrap_err();
    assert!(missing.is_not_found());

    assert_eq!(r.expenses.delete_expense(created.id).await.unwrap(), 1);
    assert_eq!(r.expenses.delete_expense(created.id).await.unwrap(), 0);
    assert!(r.expenses.get_expense(created.id).unwrap().is_none());
}

#[tokio::test]
async fn budgets_first_match_and_series_filter() {
    let r = repos();
    let alice = r.users.insert_user(record("alice")).await.unwrap();

    let first = r
        .budgets
        .insert_budget(alice.id, budget(2025, 2, 500.0))
        .await
        .unwrap();
    r.budgets
        .insert_budget(alice.id, budget(2025, 2, 900.0))
        .await
        .unwrap();
    r.budgets
        .insert_budget(alice.id, budget(2025, 3, 100.0))
        .await
        .unwrap();
    r.budgets
        .insert_budget(alice.id, budget(2024, 11, 300.0))
        .await
        .unwrap();
    r.budgets
        .insert_budget(alice.id, budget(2023, 12, 50.0))
        .await
        .unwrap();

    let found = r.budgets.find_budget(alice.id, 2025, 2).unwrap().unwrap();
    assert_eq!(found.id, first.id);
    assert_eq!(found.budget, 500.0);
    assert!(r.budgets.find_budget(alice.id, 2025, 4).unwrap().is_none());

    let series = r.budgets.get_budgets_for_series(alice.id, 2025, 2).unwrap();
    let picked: Vec<(i32, i32)> = series.iter().map(|b| (b.year, b.month)).collect();
    assert_eq!(picked, vec![(2025, 2), (2025, 2), (2024, 11)]);
}

#[tokio::test]
async fn deleting_a_user_cascades() {
    let r = repos();
    let alice = r.users.insert_user(record("alice")).await.unwrap();
    let expense = r
        .expenses
        .insert_expense(alice.id, spend(d(2025, 2, 1), "food", 10.0))
        .await
        .unwrap();
    r.budgets
        .insert_budget(alice.id, budget(2025, 2, 500.0))
        .await
        .unwrap();
    r.codes
        .upsert_code(RecoveryCode {
            email: alice.email.clone(),
            code: "123456".into(),
            expires_at: d(2030, 1, 1).and_hms_opt(0, 0, 0).unwrap(),
        })
        .await
        .unwrap();

    assert_eq!(r.users.delete_user(alice.id).await.unwrap(), 1);

    assert!(r.expenses.get_expense(expense.id).unwrap().is_none());
    assert!(r.budgets.find_budget(alice.id, 2025, 2).unwrap().is_none());
    assert!(r.codes.get_code(&alice.email).unwrap().is_none());
}

#[tokio::test]
async fn recovery_codes_upsert_and_expire() {
    let r = repos();
    let alice = r.users.insert_user(record("alice")).await.unwrap();
    let bob = r.users.insert_user(record("bob")).await.unwrap();
    let now = d(2025, 2, 14).and_hms_opt(12, 0, 0).unwrap();

    for code in ["111111", "222222"] {
        r.codes
            .upsert_code(RecoveryCode {
                email: alice.email.clone(),
                code: code.into(),
                expires_at: now + Duration::minutes(15),
            })
            .await
            .unwrap();
    }
    r.codes
        .upsert_code(RecoveryCode {
            email: bob.email.clone(),
            code: "333333".into(),
            expires_at: now - Duration::minutes(1),
        })
        .await
        .unwrap();

    assert_eq!(r.codes.get_code(&alice.email).unwrap().unwrap().code, "222222");
    assert_eq!(r.codes.delete_expired(now).await.unwrap(), 1);
    assert!(r.codes.get_code(&bob.email).unwrap().is_none());
    assert_eq!(r.codes.delete_code(&alice.email).await.unwrap(), 1);
}

#[tokio::test]
async fn recovery_code_requires_existing_email() {
    let r = repos();
    let err = r
        .codes
        .upsert_code(RecoveryCode {
            email: "ghost@test.com".into(),
            code: "123456".into(),
            expires_at: d(2030, 1, 1).and_hms_opt(0, 0, 0).unwrap(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Database(DatabaseError::ForeignKeyViolation(_))
    ));
}
