use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use serde::Serialize;

use crate::constants::ERR_NOT_UTF8;
use crate::error::{AppError, Result};
use crate::ingest::handle_submission;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: &'static str,
}

/// Receive one form submission
///
/// The body is read as raw bytes regardless of content type, since the
/// forms post `text/plain` to avoid a CORS preflight. Failures, including
/// bodies over the size limit, are rendered as
/// `{"status": "error", "message": ...}` by `AppError`.
pub async fn submit(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<SubmitResponse>> {
    let raw_body = String::from_utf8(body?.to_vec())
        .map_err(|_| AppError::InvalidInput(ERR_NOT_UTF8.to_string()))?;

    let store = state.store.clone();
    let receipt =
        tokio::task::spawn_blocking(move || handle_submission(store.as_ref(), &raw_body))
            .await??;

    tracing::info!(
        "Submission stored in {} at row {}",
        receipt.category,
        receipt.row
    );

    Ok(Json(SubmitResponse { status: "success" }))
}
