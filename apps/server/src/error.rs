use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tripwise_core::errors::{Error as CoreError, ValidationError};
use tripwise_core::BudgetError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg, details) = match &self {
            ApiError::Core(e) => match e {
                // Client-facing rejections are shown without the validation prefix
                CoreError::Validation(ValidationError::InvalidRequest(reason)) => {
                    (StatusCode::BAD_REQUEST, reason.clone(), None)
                }
                CoreError::Budget(budget_error) => {
                    let BudgetError::TooLow {
                        requested_amount,
                        minimum_amount,
                        destination,
                        duration,
                    } = budget_error;
                    let details = json!({
                        "requestedAmount": requested_amount,
                        "minimumAmount": minimum_amount,
                        "destination": destination,
                        "duration": duration,
                    });
                    (StatusCode::BAD_REQUEST, e.to_string(), Some(details))
                }
            },
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone(), None),
        };
        tracing::debug!("Request rejected with {}: {}", status, msg);
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
            details,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
