use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use spendwise_core::errors::{DatabaseError, Error as CoreError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

fn core_status(err: &CoreError) -> (StatusCode, String) {
    match err {
        CoreError::Validation(inner) => (StatusCode::BAD_REQUEST, inner.to_string()),
        CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        // Bad credentials are a client error here, not 401.
        CoreError::Unauthorized(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        CoreError::ConstraintViolation(msg) => (StatusCode::CONFLICT, msg.clone()),
        CoreError::Database(DatabaseError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, err.to_string())
        }
        CoreError::Database(DatabaseError::UniqueViolation(_)) => {
            (StatusCode::CONFLICT, err.to_string())
        }
        CoreError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        CoreError::Database(_) | CoreError::Unexpected(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) => core_status(e),
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use spendwise_core::errors::ValidationError;

    fn status_of(err: CoreError) -> (StatusCode, String) {
        core_status(&err)
    }

    #[test]
    fn validation_renders_inner_message() {
        let (status, msg) = status_of(CoreError::invalid_input("Amount must be positive"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(msg, "Amount must be positive");

        let (status, _) = status_of(CoreError::Validation(ValidationError::WeakPassword(
            "weak".into(),
        )));
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn domain_errors_map_to_statuses() {
        assert_eq!(
            status_of(CoreError::NotFound("User not found".into())).0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(CoreError::Unauthorized("Invalid credentials".into())).0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(CoreError::ConstraintViolation("dup".into())).0,
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(CoreError::Database(DatabaseError::UniqueViolation("x".into()))).0,
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(CoreError::Database(DatabaseError::NotFound("x".into()))).0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(CoreError::Upstream("smtp down".into())).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(CoreError::Database(DatabaseError::QueryFailed("x".into()))).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
