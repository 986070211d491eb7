use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    SlotUnavailable(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("no image was provided")]
    NoImageProvided,
    #[error("no text was detected in the image")]
    NoTextDetected,
    #[error("text recognition failed: {0}")]
    RecognizerError(String),
    #[error("transaction failed")]
    TransactionError(#[source] sqlx::Error),
    #[error("database operation failed")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("{0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    ConversionEntityError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::SlotUnavailable(_) => StatusCode::CONFLICT,
            AppError::ValidationError(_)
            | AppError::NoImageProvided
            | AppError::NoTextDetected => StatusCode::BAD_REQUEST,
            e @ (AppError::RecognizerError(_)
            | AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::ConversionEntityError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        // Internal details stay in the logs; callers get a generic message.
        let message = if status_code.is_server_error() {
            "internal server error".to_string()
        } else {
            self.to_string()
        };
        let body = axum::Json(serde_json::json!({ "error": message }));
        (status_code, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
