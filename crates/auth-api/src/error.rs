use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use auth_core::DomainError;

use crate::response::{FailureResponse, NotFoundResponse};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Invalid request format")]
    InvalidRequestFormat,

    #[error("Not found")]
    NotFound,

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MissingCredentials => ApiError::MissingCredentials,
            DomainError::StorageError(msg) => ApiError::InternalError(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            ApiError::MissingCredentials | ApiError::InvalidRequestFormat => {
                tracing::warn!("Bad request: {}", message);
                (StatusCode::BAD_REQUEST, Json(FailureResponse::new(&message)))
                    .into_response()
            }
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, Json(NotFoundResponse::default())).into_response()
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(FailureResponse::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}
