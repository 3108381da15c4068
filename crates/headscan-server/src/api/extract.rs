//! Heading extraction handlers: `POST /api/extract-h1` and `POST /api/extract-more`.
//!
//! Both endpoints answer `200` with one record per non-blank address no matter
//! how many pages failed; per-page failures live inside the records.

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use headscan_core::{ExtractionMode, HeadingRecord};
use headscan_scraper::BatchError;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(in crate::api) struct ExtractRequest {
    pub urls: Vec<String>,
}

/// `POST /api/extract-h1`: H1 text for every address.
pub(in crate::api) async fn extract_h1(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Json<Vec<HeadingRecord>>, ApiError> {
    run_extraction(&state, &req_id, body, ExtractionMode::H1Only).await
}

/// `POST /api/extract-more`: H1, H2 and H3 text for every address.
pub(in crate::api) async fn extract_more(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Json<Vec<HeadingRecord>>, ApiError> {
    run_extraction(&state, &req_id, body, ExtractionMode::H1H2H3).await
}

async fn run_extraction(
    state: &AppState,
    req_id: &RequestId,
    body: Result<Json<ExtractRequest>, JsonRejection>,
    mode: ExtractionMode,
) -> Result<Json<Vec<HeadingRecord>>, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        tracing::debug!(
            request_id = %req_id.0,
            error = %rejection.body_text(),
            "rejected extraction request body"
        );
        ApiError::bad_request("Invalid request")
    })?;

    tracing::info!(
        request_id = %req_id.0,
        urls = request.urls.len(),
        mode = ?mode,
        "extraction requested"
    );

    let results = headscan_scraper::run_batch(
        &state.client,
        &request.urls,
        mode,
        state.max_concurrent_fetches,
    )
    .await
    .map_err(|e| match e {
        BatchError::EmptyBatch => ApiError::bad_request("No URLs provided"),
    })?;

    Ok(Json(HeadingRecord::from_batch(&results)))
}
