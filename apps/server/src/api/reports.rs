use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use spendwise_core::constants::DEFAULT_USER_ID;
use spendwise_core::reports::{
    CategoryTotal, MonthlyBreakdown, MonthlySpendVsBudget, PeriodExpenses, RecentExpense,
};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
struct CategoryQuery {
    category: String,
    user_id: Option<i32>,
}

#[derive(Deserialize)]
struct UsernameQuery {
    username: String,
}

async fn total_by_category(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CategoryQuery>,
) -> ApiResult<Json<CategoryTotal>> {
    let total = state
        .report_service
        .total_by_category(&query.category, query.user_id.unwrap_or(DEFAULT_USER_ID))?;
    Ok(Json(total))
}

async fn spend_vs_budget(
    Path(period): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(query): Query<UsernameQuery>,
) -> ApiResult<Json<Vec<MonthlySpendVsBudget>>> {
    let series = state
        .report_service
        .spend_vs_budget_series(&period, &query.username)?;
    Ok(Json(series))
}

async fn expenses_for_period(
    Path(period): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(query): Query<UsernameQuery>,
) -> ApiResult<Json<PeriodExpenses>> {
    let listing = state
        .report_service
        .expenses_for_period(&period, &query.username)?;
    Ok(Json(listing))
}

async fn monthly_breakdown(
    Path(username): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MonthlyBreakdown>> {
    Ok(Json(state.report_service.monthly_breakdown(&username)?))
}

async fn recent_expenses(
    Path(username): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<RecentExpense>>> {
    Ok(Json(state.report_service.recent_expenses(&username)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses/total_by_category/", get(total_by_category))
        .route("/expenses/period/{period}", get(spend_vs_budget))
        .route(
            "/expenses/period_detailed2/{period}",
            get(expenses_for_period),
        )
        .route("/expenses/monthly/{username}", get(monthly_breakdown))
        .route("/expenses/recent/{username}", get(recent_expenses))
}
