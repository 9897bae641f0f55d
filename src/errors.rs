use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::models::bookings::BookingStatus;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    #[error("storage lock poisoned")]
    Poisoned,
}

#[derive(Error, Debug, PartialEq)]
pub enum BookingError {
    #[error("booking not found: {0}")]
    NotFound(String),

    #[error("cannot confirm booking {id}: status is {status:?}, expected Provisional")]
    InvalidTransition { id: String, status: BookingStatus },
}

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("only PDF files can be used as agreements, got '{0}'")]
    NotPdf(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors surfaced by route handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::NotFound(_) => ApiError::NotFound(err.to_string()),
            BookingError::InvalidTransition { .. } => ApiError::Conflict(err.to_string()),
        }
    }
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::NotPdf(_) => ApiError::BadRequest(err.to_string()),
            UploadError::Storage(e) => ApiError::Storage(e),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Storage(e) = self {
            log::error!("Storage failure: {}", e);
        }
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
