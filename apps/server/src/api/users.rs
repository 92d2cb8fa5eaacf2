use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{post, put},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use spendwise_core::users::{
    DeleteUserRequest, LoginRequest, NewUser, PasswordChange, ProfileUpdate, User,
};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Serialize)]
struct UserEnvelope {
    message: &'static str,
    user: User,
}

async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(new_user): Json<NewUser>,
) -> ApiResult<Json<UserEnvelope>> {
    let user = state.user_service.register_user(new_user).await?;
    Ok(Json(UserEnvelope {
        message: "User created",
        user,
    }))
}

async fn delete_user(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DeleteUserRequest>,
) -> ApiResult<Json<Value>> {
    let deleted = state.user_service.delete_user(request).await?;
    Ok(Json(json!({
        "message": "User deleted successfully",
        "user": { "username": deleted.username, "email": deleted.email },
    })))
}

/// Returns the profile on success; there is no session token.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(login): Json<LoginRequest>,
) -> ApiResult<Json<User>> {
    let user = state.user_service.authenticate(login)?;
    tracing::info!("User {} logged in", user.id);
    Ok(Json(user))
}

async fn logout() -> Json<Value> {
    Json(json!({ "message": "Logged out successfully" }))
}

async fn update_profile(
    Path(user_id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Query(profile): Query<ProfileUpdate>,
) -> ApiResult<Json<UserEnvelope>> {
    let user = state.user_service.update_profile(user_id, profile).await?;
    Ok(Json(UserEnvelope {
        message: "Profile updated successfully",
        user,
    }))
}

async fn update_password(
    Path(user_id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(change): Json<PasswordChange>,
) -> ApiResult<Json<Value>> {
    state.user_service.change_password(user_id, change).await?;
    Ok(Json(json!({ "message": "Password updated successfully" })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/", post(register_user).delete(delete_user))
        .route("/login/", post(login))
        .route("/logout/", post(logout))
        .route("/users/update-profile/{user_id}", put(update_profile))
        .route("/users/update-password/{user_id}", put(update_password))
}
