use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use sqlx::error::ErrorKind;
use thiserror::Error;

use crate::handlers::shared::ApiResult;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(sqlx::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("One or more validation failures have occurred.")]
    Validation(Vec<String>),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error{}", .0.as_ref().map_or("".to_string(), |s| format!(": {}", s)))]
    InternalServerError(Option<String>),
}

impl AppError {
    /// The fixed "<Entity> Not Found." error for a missing record.
    pub fn not_found(entity: &str) -> Self {
        AppError::NotFound(format!("{} Not Found.", entity))
    }

    pub fn internal_server_error_message(message: impl Into<String>) -> Self {
        AppError::InternalServerError(Some(message.into()))
    }

    pub fn internal_server_error() -> Self {
        AppError::InternalServerError(None)
    }

    /// Individual error lines carried in the failure envelope.
    pub fn errors(&self) -> Vec<String> {
        match self {
            AppError::Validation(errors) => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownField(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        if status_code.is_server_error() {
            log::error!(
                "Request failed with status {}: {}",
                status_code,
                error_message
            );
        } else {
            log::warn!(
                "Request failed with status {}: {}",
                status_code,
                error_message
            );
        }

        let response_body = ApiResult::<()>::failure(error_message, self.errors());

        HttpResponse::build(status_code).json(response_body)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_error) = &error {
            match db_error.kind() {
                ErrorKind::UniqueViolation | ErrorKind::ForeignKeyViolation => {
                    log::warn!("Constraint violation: {}", db_error);
                    return AppError::Conflict(db_error.message().to_string());
                }
                _ => {}
            }
        }

        if matches!(error, sqlx::Error::RowNotFound) {
            return AppError::NotFound("Record Not Found.".to_string());
        }

        log::error!("Database error: {}", error);
        AppError::DatabaseError(error)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        log::error!("Anyhow error: {}", error);

        // Check if this is a sqlx::Error and handle it appropriately
        match error.downcast::<sqlx::Error>() {
            Ok(sqlx_err) => AppError::from(sqlx_err),
            Err(original_error) => AppError::InternalServerError(Some(original_error.to_string())),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::InternalServerError(Some(format!("Serialization failed: {}", error)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_the_entity_message() {
        let error = AppError::not_found("SalaryRange");
        assert_eq!(error.to_string(), "SalaryRange Not Found.");
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(error.errors(), vec!["SalaryRange Not Found.".to_string()]);
    }

    #[test]
    fn validation_errors_are_listed_individually() {
        let error = AppError::Validation(vec!["name: required".into(), "email: invalid".into()]);
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.errors().len(), 2);
    }

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(error, AppError::NotFound(_)));
    }
}
