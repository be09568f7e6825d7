//! Where downloaded documents land.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("download failed: {0}")]
    Download(#[from] reqwest::Error),
    #[error("document endpoint answered {0}")]
    Status(reqwest::StatusCode),
    #[error("write failed: {0}")]
    Write(#[from] std::io::Error),
}

/// Sink for document downloads, injected so page logic stays independent
/// of the filesystem.
#[async_trait]
pub trait FileSaver: Send + Sync {
    /// Stores the document behind `reference` under `suggested_name`.
    async fn save(&self, reference: &str, suggested_name: &str) -> Result<PathBuf, SaveError>;
}

/// Saves documents into a directory on disk, named after the attachment
/// label rather than anything in the reference.
pub struct DiskSaver {
    http: reqwest::Client,
    target_dir: PathBuf,
}

impl DiskSaver {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            http: reqwest::Client::new(),
            target_dir: target_dir.into(),
        }
    }
}

#[async_trait]
impl FileSaver for DiskSaver {
    async fn save(&self, reference: &str, suggested_name: &str) -> Result<PathBuf, SaveError> {
        let response = self.http.get(reference).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SaveError::Status(status));
        }
        let bytes = response.bytes().await?;

        tokio::fs::create_dir_all(&self.target_dir).await?;
        let path = self.target_dir.join(sanitize(suggested_name));
        tokio::fs::write(&path, &bytes).await?;
        tracing::debug!(path = %path.display(), "saved document");
        Ok(path)
    }
}

/// Keeps an attachment label usable as a file name.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
        .collect()
}
