use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use spendwise_core::budgets::{MonthlyBudget, NewMonthlyBudget};
use spendwise_core::constants::DEFAULT_USER_ID;
use spendwise_core::reports::BudgetStatus;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Serialize)]
struct Created {
    message: &'static str,
    budget: MonthlyBudget,
}

#[derive(Deserialize)]
struct StatusQuery {
    year: i32,
    month: i32,
    user_id: Option<i32>,
}

/// Creates the owning user first when the id is unknown.
async fn create_budget(
    State(state): State<Arc<AppState>>,
    Json(mut budget): Json<NewMonthlyBudget>,
) -> ApiResult<Json<Created>> {
    let user_id = budget
        .user_id
        .filter(|id| *id != 0)
        .unwrap_or(DEFAULT_USER_ID);
    state.user_service.ensure_user(user_id).await?;
    budget.user_id = Some(user_id);

    let budget = state.budget_service.create_budget(budget).await?;
    Ok(Json(Created {
        message: "Budget added successfully",
        budget,
    }))
}

async fn budget_status(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StatusQuery>,
) -> ApiResult<Json<BudgetStatus>> {
    let status = state.report_service.budget_status(
        query.year,
        query.month,
        query.user_id.unwrap_or(DEFAULT_USER_ID),
    )?;
    Ok(Json(status))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/budgets/", post(create_budget))
        .route("/budget/status/", get(budget_status))
}
