//! Local-disk store for uploaded images and videos.
//!
//! Files are written under `{root}/{category}/` with a timestamped name (see
//! [`crate::uploads::stored_filename`]). Two uploads of the same sanitized
//! name within the same second resolve to the same path; the later write wins.

use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::uploads::{stored_filename, upload_url, validate_category, validate_extension};

/// Result of a successful [`FileStore`] write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Final on-disk filename (timestamp-prefixed, sanitized).
    pub file_name: String,
    /// Public URL path, e.g. `/uploads/events/20250810_060000_poster.jpg`.
    pub url: String,
}

/// Writes uploads beneath a root directory, one subdirectory per category.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory served at `/uploads`.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate and write `bytes` as `category/{timestamp}_{name}`.
    pub async fn store(
        &self,
        category: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<StoredFile, CoreError> {
        self.store_prefixed(None, category, file_name, bytes).await
    }

    /// Like [`FileStore::store`], with an extra leading `{prefix}_` on the name.
    ///
    /// Nothing touches the disk unless both the category and the extension
    /// are valid.
    pub async fn store_prefixed(
        &self,
        prefix: Option<&str>,
        category: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<StoredFile, CoreError> {
        validate_category(category)?;
        let ext = validate_extension(file_name)?;

        let dir = self.root.join(category);
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            CoreError::Storage(format!("Failed to create '{}': {e}", dir.display()))
        })?;

        let stored = stored_filename(prefix, file_name, &ext, chrono::Utc::now());
        let path = dir.join(&stored);
        tokio::fs::write(&path, bytes).await.map_err(|e| {
            CoreError::Storage(format!("Failed to write '{}': {e}", path.display()))
        })?;

        Ok(StoredFile {
            url: upload_url(category, &stored),
            file_name: stored,
        })
    }
}
