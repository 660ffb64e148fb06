//! Mastering store
//!
//! Persists uploads and publishes mastered copies. "Mastering" here is a
//! byte-for-byte copy into the public master area under a generated name;
//! no audio processing happens.
//!
//! A failed copy after a successful upload write leaves the upload behind
//! with no master. That orphan is accepted and never cleaned up.

use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::storage::naming;

/// Result of mastering one upload.
#[derive(Debug, Clone)]
pub struct MasteredFile {
    /// Filename exactly as submitted by the client.
    pub original_filename: String,

    /// Name the raw upload was stored under (timestamped).
    pub upload_filename: String,

    /// Generated public name of the mastered copy.
    pub master_filename: String,

    /// Size of the artifact in bytes.
    pub size_bytes: u64,
}

/// Filesystem store for the upload and master areas.
#[derive(Debug, Clone)]
pub struct MasteringStore {
    upload_dir: PathBuf,
    master_dir: PathBuf,
}

impl MasteringStore {
    pub fn new(upload_dir: PathBuf, master_dir: PathBuf) -> Self {
        Self {
            upload_dir,
            master_dir,
        }
    }

    /// Create both artifact areas if they do not exist yet.
    pub async fn init(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.upload_dir).await?;
        tokio::fs::create_dir_all(&self.master_dir).await?;
        Ok(())
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn master_dir(&self) -> &Path {
        &self.master_dir
    }

    /// Validate, persist, and publish one upload.
    ///
    /// The raw bytes are written to the upload area first, then copied
    /// byte-for-byte into the master area under a fresh generated name.
    ///
    /// # Errors
    ///
    /// - `InvalidFileType` if the filename is not `.wav` (nothing written)
    /// - `Storage` on any filesystem failure; a copy failure does not
    ///   remove the already-written upload
    pub async fn master(
        &self,
        original_filename: &str,
        data: &[u8],
    ) -> Result<MasteredFile, AppError> {
        if !naming::is_wav(original_filename) {
            return Err(AppError::InvalidFileType(original_filename.to_string()));
        }

        let upload_filename = naming::upload_filename(naming::sanitize(original_filename));
        let upload_path = self.upload_dir.join(&upload_filename);
        tokio::fs::write(&upload_path, data).await?;

        let master_filename = naming::master_filename();
        let master_path = self.master_dir.join(&master_filename);
        tokio::fs::copy(&upload_path, &master_path).await?;

        Ok(MasteredFile {
            original_filename: original_filename.to_string(),
            upload_filename,
            master_filename,
            size_bytes: data.len() as u64,
        })
    }

    /// Read a published master by its public name.
    ///
    /// Names carrying path separators or dot components never match a
    /// published artifact and come back as `NotFound`.
    pub async fn read_master(&self, filename: &str) -> Result<Vec<u8>, AppError> {
        if !is_safe_name(filename) {
            return Err(AppError::NotFound(filename.to_string()));
        }

        let path = self.master_dir.join(filename);
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::NotFound(filename.to_string()))
            }
            Err(e) => Err(AppError::Storage(e)),
        }
    }
}

/// A public name must be a single plain path component.
fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains('/')
        && !name.contains('\\')
        && name != "."
        && name != ".."
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store(tmp: &TempDir) -> MasteringStore {
        MasteringStore::new(tmp.path().join("uploads"), tmp.path().join("master"))
    }

    async fn dir_entries(dir: &Path) -> Vec<PathBuf> {
        let mut entries = Vec::new();
        let mut rd = tokio::fs::read_dir(dir).await.unwrap();
        while let Some(entry) = rd.next_entry().await.unwrap() {
            entries.push(entry.path());
        }
        entries
    }

    #[tokio::test]
    async fn test_master_writes_both_areas_byte_identical() {
        let tmp = TempDir::new().unwrap();
        let store = test_store(&tmp);
        store.init().await.unwrap();

        let data = b"RIFF....WAVEfmt fake wav bytes";
        let mastered = store.master("track.wav", data).await.unwrap();

        assert_eq!(mastered.original_filename, "track.wav");
        assert!(mastered.upload_filename.ends_with("-track.wav"));
        assert_eq!(mastered.size_bytes, data.len() as u64);

        let uploaded = tokio::fs::read(store.upload_dir().join(&mastered.upload_filename))
            .await
            .unwrap();
        assert_eq!(uploaded, data);

        let published = store.read_master(&mastered.master_filename).await.unwrap();
        assert_eq!(published, data);
    }

    #[tokio::test]
    async fn test_master_rejects_non_wav_without_writing() {
        let tmp = TempDir::new().unwrap();
        let store = test_store(&tmp);
        store.init().await.unwrap();

        let result = store.master("track.mp3", b"not audio").await;
        assert!(matches!(result, Err(AppError::InvalidFileType(_))));

        assert!(dir_entries(store.upload_dir()).await.is_empty());
        assert!(dir_entries(store.master_dir()).await.is_empty());
    }

    #[tokio::test]
    async fn test_master_sanitizes_path_components() {
        let tmp = TempDir::new().unwrap();
        let store = test_store(&tmp);
        store.init().await.unwrap();

        let mastered = store
            .master("../escape/track.wav", b"bytes")
            .await
            .unwrap();

        // Upload stays inside the upload area under the basename.
        assert!(mastered.upload_filename.ends_with("-track.wav"));
        assert!(store
            .upload_dir()
            .join(&mastered.upload_filename)
            .exists());
    }

    #[tokio::test]
    async fn test_read_master_unknown_name() {
        let tmp = TempDir::new().unwrap();
        let store = test_store(&tmp);
        store.init().await.unwrap();

        let result = store.read_master("SGL_666_never_published_MASTER.wav").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_read_master_rejects_traversal() {
        let tmp = TempDir::new().unwrap();
        let store = test_store(&tmp);
        store.init().await.unwrap();

        // Plant a file outside the master area.
        tokio::fs::write(tmp.path().join("secret.txt"), b"secret")
            .await
            .unwrap();

        for name in ["../secret.txt", "..", "a/b.wav", "a\\b.wav", ""] {
            let result = store.read_master(name).await;
            assert!(
                matches!(result, Err(AppError::NotFound(_))),
                "expected NotFound for {:?}",
                name
            );
        }
    }

    #[tokio::test]
    async fn test_master_names_distinct_for_identical_uploads() {
        let tmp = TempDir::new().unwrap();
        let store = test_store(&tmp);
        store.init().await.unwrap();

        let a = store.master("same.wav", b"one").await.unwrap();
        let b = store.master("same.wav", b"two").await.unwrap();
        assert_ne!(a.master_filename, b.master_filename);

        // Both masters retrievable with their own bytes.
        assert_eq!(store.read_master(&a.master_filename).await.unwrap(), b"one");
        assert_eq!(store.read_master(&b.master_filename).await.unwrap(), b"two");
    }
}
