use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{response::ErrorBody, store::StoreError};

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong on the server.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    Validation {
        message: String,
        details: Vec<String>,
    },

    #[error("{0}")]
    Authentication(String),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Vec<String>) -> Self {
        AppError::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Authentication(_) => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NotFound",
            AppError::Validation { .. } => "ValidationError",
            AppError::Authentication(_) => "AuthenticationError",
            AppError::Internal(_) => "Unclassified",
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => AppError::NotFound(format!("Product with id {id} not found.")),
            other => AppError::Internal(other.into()),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::validation(rejection.body_text(), Vec::new())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::Internal(err) => {
                tracing::error!(kind = self.kind(), error = ?err, "request failed");
            }
            _ => {
                tracing::warn!(kind = self.kind(), message = %self, "request failed");
            }
        }

        let body = match self {
            AppError::Validation { message, details } => ErrorBody::with_details(message, details),
            AppError::Internal(_) => ErrorBody::new(GENERIC_ERROR_MESSAGE),
            other => ErrorBody::new(other.to_string()),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
