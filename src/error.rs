use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid request body: {0}")]
    BodyRejected(#[from] axum::extract::rejection::BytesRejection),
}

impl AppError {
    /// Whether the caller sent something unusable, as opposed to a store failure
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::MalformedJson(_) | AppError::InvalidInput(_) | AppError::BodyRejected(_)
        )
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BodyRejected(rejection) => rejection.status(),
            _ if self.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Implement IntoResponse to convert AppError into the error envelope
///
/// Every failure renders as `{"status": "error", "message": ...}`.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_client_error() {
            tracing::warn!("Rejected submission: {}", self);
        } else {
            tracing::error!("Submission failed: {:?}", self);
        }

        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
