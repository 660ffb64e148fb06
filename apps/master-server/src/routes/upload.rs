//! Upload route
//!
//! POST /upload accepts one multipart file under field `file`, persists it
//! to the upload area, and publishes a byte-identical mastered copy.

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    http::{header, HeaderMap},
    Json,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Upload response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub original_filename: String,
    pub master_filename: String,
    pub download_link: String,
}

/// One file as decoded from the multipart payload.
#[derive(Debug)]
struct UploadedFile {
    field_name: String,
    original_filename: String,
    size_bytes: u64,
    data: Bytes,
}

/// POST /upload
pub async fn upload_track(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let file = extract_file(multipart)
        .await?
        .ok_or(AppError::NoFileUploaded)?;

    tracing::debug!(
        field = %file.field_name,
        filename = %file.original_filename,
        size = file.size_bytes,
        "Received upload"
    );

    let mastered = state
        .store()
        .master(&file.original_filename, &file.data)
        .await?;

    let download_link = download_link(&headers, &mastered.master_filename);

    tracing::info!(
        original = %mastered.original_filename,
        master = %mastered.master_filename,
        size = mastered.size_bytes,
        "Upload mastered"
    );

    Ok(Json(UploadResponse {
        success: true,
        original_filename: mastered.original_filename,
        master_filename: mastered.master_filename,
        download_link,
    }))
}

/// Walk the multipart fields and pull out the one named `file`.
///
/// Decode failures surface as 400s with detail; a payload with no `file`
/// field comes back as `None`.
async fn extract_file(mut multipart: Multipart) -> Result<Option<UploadedFile>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Multipart(e.to_string()))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        if field_name != "file" {
            continue;
        }

        let original_filename = field
            .file_name()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Multipart(e.to_string()))?;

        return Ok(Some(UploadedFile {
            field_name,
            original_filename,
            size_bytes: data.len() as u64,
            data,
        }));
    }

    Ok(None)
}

/// Build the absolute download URL from the request's scheme and host.
fn download_link(headers: &HeaderMap, master_filename: &str) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");

    format!("{}://{}/master/{}", scheme, host, master_filename)
}
