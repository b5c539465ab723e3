use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

use crate::constants::{ERR_EMAIL_EXISTS, ERR_INTERNAL, ERR_VALIDATION_FAILED};
use crate::models::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Validation Error: {0:?}")]
    ValidationError(Vec<String>),
    #[error("Duplicate Email: {0}")]
    DuplicateEmail(String),
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_)
            | ApiError::ValidationError(_)
            | ApiError::DuplicateEmail(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::BadRequest(message)
            | ApiError::DuplicateEmail(message)
            | ApiError::NotFound(message) => ErrorResponse::new(message),
            ApiError::ValidationError(errors) => ErrorResponse {
                error: ERR_VALIDATION_FAILED.to_string(),
                errors: Some(errors.clone()),
            },
            // Driver details stay in the log.
            ApiError::InternalServerError(detail) => {
                error!("Request failed: {}", detail);
                ErrorResponse::new(ERR_INTERNAL)
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                ApiError::DuplicateEmail(ERR_EMAIL_EXISTS.to_string())
            }
            other => ApiError::InternalServerError(other.to_string()),
        }
    }
}
