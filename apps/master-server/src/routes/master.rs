//! Master download route
//!
//! Serves published artifacts from the master area by their generated name.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// GET /master/:filename
///
/// Pure passthrough: streams the published bytes with content headers,
/// or a 404 JSON body if the name was never published.
pub async fn download_master(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response> {
    let data = state.store().read_master(&filename).await?;

    let content_type = mime_guess::from_path(&filename).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type.essence_str())
        .header(header::CONTENT_LENGTH, data.len())
        .header(
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", filename),
        )
        .header(header::CACHE_CONTROL, "public, max-age=86400")
        .body(Body::from(data))
        .map_err(|e| AppError::Internal(e.to_string()))
}
