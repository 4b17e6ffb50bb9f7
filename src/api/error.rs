use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::error::CalcError;

/// Errors surfaced to HTTP clients. All of them are client errors.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Calc(#[from] CalcError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson(_) | ApiError::Validation(_) | ApiError::Calc(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        log::warn!("request rejected ({}): {}", status.as_u16(), self);
        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
