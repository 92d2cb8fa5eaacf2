use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use serde::Serialize;
use spendwise_core::expenses::{Expense, NewExpense};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Serialize)]
struct ExpenseList {
    expenses: Vec<Expense>,
}

#[derive(Serialize)]
struct Created {
    message: &'static str,
    expense: Expense,
}

#[derive(Serialize)]
struct Updated {
    message: &'static str,
    updated_expense: Expense,
}

#[derive(Serialize)]
struct Deleted {
    message: &'static str,
    deleted_expense: Expense,
}

async fn list_expenses(State(state): State<Arc<AppState>>) -> ApiResult<Json<ExpenseList>> {
    let expenses = state.expense_service.get_expenses()?;
    Ok(Json(ExpenseList { expenses }))
}

async fn create_expense(
    State(state): State<Arc<AppState>>,
    Json(expense): Json<NewExpense>,
) -> ApiResult<Json<Created>> {
    let expense = state.expense_service.create_expense(expense).await?;
    Ok(Json(Created {
        message: "Expense added successfully",
        expense,
    }))
}

async fn update_expense(
    Path(expense_id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(changes): Json<NewExpense>,
) -> ApiResult<Json<Updated>> {
    let updated_expense = state
        .expense_service
        .update_expense(expense_id, changes)
        .await?;
    Ok(Json(Updated {
        message: "Expense updated successfully",
        updated_expense,
    }))
}

async fn delete_expense(
    Path(expense_id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Deleted>> {
    let deleted_expense = state.expense_service.delete_expense(expense_id).await?;
    Ok(Json(Deleted {
        message: "Expense deleted successfully",
        deleted_expense,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses/", get(list_expenses).post(create_expense))
        .route(
            "/expenses/{expense_id}",
            put(update_expense).delete(delete_expense),
        )
}
