//! Filename policy for uploaded and published artifacts
//!
//! Upload names carry a millisecond timestamp to reduce collisions between
//! uploads sharing an original filename. Master names carry 128 bits of
//! OS randomness, which makes a publish-name collision negligible under any
//! concurrency.

use chrono::Utc;
use rand::RngCore;
use std::path::Path;

/// Prefix for every published master filename.
pub const MASTER_PREFIX: &str = "SGL_666_";

/// Suffix for every published master filename.
pub const MASTER_SUFFIX: &str = "_MASTER.wav";

/// Check whether a filename carries a `.wav` extension (case-insensitive).
pub fn is_wav(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("wav"))
        .unwrap_or(false)
}

/// Strip any path components a client smuggled into the filename.
pub fn sanitize(filename: &str) -> &str {
    Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.wav")
}

/// Derive the upload-area filename: `<timestamp_millis>-<original>`.
pub fn upload_filename(original: &str) -> String {
    format!("{}-{}", Utc::now().timestamp_millis(), original)
}

/// Generate a fresh master filename: `SGL_666_<hex32>_MASTER.wav`.
///
/// The hex component is a 128-bit value from the OS RNG rendered as 32
/// lowercase hex characters with no separators.
pub fn master_filename() -> String {
    let mut token = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut token);
    format!("{}{}{}", MASTER_PREFIX, hex::encode(token), MASTER_SUFFIX)
}
