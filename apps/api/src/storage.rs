//! On-disk store for uploaded resumes. Files live in a single flat directory
//! under UUID names; the stored name is the only client-supplied value ever
//! used to locate a file again.

use std::path::{Path, PathBuf};

use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::UploadedFile;

#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    /// Creates the upload directory if needed and returns the store.
    pub async fn init(root: PathBuf) -> Result<Self, AppError> {
        tokio::fs::create_dir_all(&root).await?;
        info!("Upload store ready at {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persists an upload under a fresh UUID name to prevent collisions.
    pub async fn save(&self, original_name: &str, data: &[u8]) -> Result<UploadedFile, AppError> {
        let stored_name = format!("{}.pdf", Uuid::new_v4().simple());
        let path = self.root.join(&stored_name);
        tokio::fs::write(&path, data).await?;
        Ok(UploadedFile {
            original_name: original_name.to_string(),
            stored_name,
            path: path.display().to_string(),
        })
    }

    /// Maps a stored name back to its path. Names with path separators or
    /// parent components are rejected so clients cannot escape the store root.
    pub fn resolve(&self, stored_name: &str) -> Result<PathBuf, AppError> {
        if stored_name.is_empty()
            || stored_name.contains('/')
            || stored_name.contains('\\')
            || stored_name.contains("..")
        {
            return Err(AppError::Validation(format!(
                "Invalid stored file name: {stored_name}"
            )));
        }
        Ok(self.root.join(stored_name))
    }

    /// Reads a stored file, distinguishing missing files from other I/O
    /// failures.
    pub async fn read(&self, stored_name: &str) -> Result<Vec<u8>, AppError> {
        let path = self.resolve(stored_name)?;
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AppError::NotFound(
                format!("Stored resume {stored_name} not found"),
            )),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}
