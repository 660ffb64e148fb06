//! Route modules for the Master Server

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub mod info;
pub mod master;
pub mod upload;

/// Uploads above this size are rejected by the body limit: 500MB
pub const MAX_UPLOAD_BYTES: usize = 500 * 1024 * 1024;

/// Assemble the full application router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(info::service_info))
        .route("/upload", post(upload::upload_track))
        .route("/master/:filename", get(master::download_master))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}
