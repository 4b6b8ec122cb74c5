use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mystro::MystroError;
use thiserror::Error;

use crate::response::ApiEnvelope;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Generation(anyhow::Error),
    #[error(transparent)]
    Library(#[from] MystroError),
    #[error(transparent)]
    Join(#[from] tokio::task::JoinError),
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        ApiError::BadRequest(err.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Library(MystroError::InvalidSlug(_)) => StatusCode::BAD_REQUEST,
            ApiError::Library(_) | ApiError::Generation(_) | ApiError::Join(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let envelope = match &self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => ApiEnvelope::<()>::error(msg),
            ApiError::Library(MystroError::InvalidSlug(_)) => {
                ApiEnvelope::error(&self.to_string())
            }
            ApiError::Generation(err) => {
                ApiEnvelope::error(&format!("generate() failed: {}", err))
                    .with_trace(format!("{:?}", err))
            }
            ApiError::Library(err) => {
                ApiEnvelope::error(&err.to_string()).with_trace(format!("{:?}", err))
            }
            ApiError::Join(err) => {
                ApiEnvelope::error(&err.to_string()).with_trace(format!("{:?}", err))
            }
        };

        if status_code.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        (status_code, Json(envelope)).into_response()
    }
}
