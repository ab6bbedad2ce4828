use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use stockroom_order::RequisitionError;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    ConflictError(String),
    /// Request could not be extracted; keeps the extractor's status
    Rejected(StatusCode, String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, msg),
            AppError::Rejected(status, msg) => (status, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<RequisitionError> for AppError {
    fn from(err: RequisitionError) -> Self {
        let msg = err.to_string();
        match err {
            RequisitionError::ProductNotFound(_) => AppError::NotFoundError(msg),
            RequisitionError::InsufficientStock { .. }
            | RequisitionError::DocumentNumbersExhausted(_) => AppError::ConflictError(msg),
            RequisitionError::InvalidQuantity(_)
            | RequisitionError::NoProductSelected
            | RequisitionError::EmptyCart => AppError::ValidationError(msg),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Rejected(rejection.status(), rejection.body_text())
    }
}
