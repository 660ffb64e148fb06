//! Service info endpoint

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct InfoResponse {
    pub message: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Serialize)]
pub struct Endpoints {
    pub info: &'static str,
    pub upload: &'static str,
    pub download: &'static str,
}

/// GET /
///
/// Static liveness/info descriptor for the service.
pub async fn service_info() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: "Audio Master API active",
        endpoints: Endpoints {
            info: "GET /",
            upload: "POST /upload (multipart field 'file', .wav only)",
            download: "GET /master/:filename",
        },
    })
}
