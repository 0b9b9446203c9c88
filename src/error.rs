//! 错误类型

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// 小票字段校验错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReceiptError {
    #[error("invalid purchaseDate: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("invalid purchaseTime: {0:?} (expected HH:MM)")]
    InvalidTime(String),

    #[error("invalid total: {0:?}")]
    InvalidTotal(String),

    #[error("invalid price of item {index}: {value:?}")]
    InvalidPrice { index: usize, value: String },
}

/// API 错误
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No receipt found for id {0}")]
    NotFound(String),

    #[error("Malformed receipt: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ReceiptError),
}

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
