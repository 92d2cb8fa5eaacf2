use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde_json::{json, Value};
use spendwise_core::recovery::{ForgotPasswordRequest, ResetPasswordRequest};

use crate::{error::ApiResult, main_lib::AppState};

async fn forgot_password(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ForgotPasswordRequest>,
) -> ApiResult<Json<Value>> {
    state.recovery_service.request_code(&request.email).await?;
    Ok(Json(json!({ "message": "Recovery code sent to your email" })))
}

async fn reset_password(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ResetPasswordRequest>,
) -> ApiResult<Json<Value>> {
    state.recovery_service.reset_password(request).await?;
    Ok(Json(json!({ "message": "Password updated successfully" })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/forgot-password", post(forgot_password))
        .route("/users/reset-password", post(reset_password))
}
