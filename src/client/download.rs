//! Resume download client component.

use std::path::{Path, PathBuf};

use reqwest::Client;
use thiserror::Error;
use tracing::{error, info};

use crate::services::RESUME_FILENAME;

/// Generic alert surfaced for any download failure; the specific cause is
/// only logged.
#[derive(Debug, Error)]
#[error("Failed to download resume. Please try again.")]
pub struct DownloadFailed;

/// Stateless client for the resume download endpoint.
pub struct ResumeDownloader {
    client: Client,
    endpoint: String,
}

impl ResumeDownloader {
    /// Create a downloader for `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetch the resume and save it under `dir` with its fixed filename.
    ///
    /// The local save-as counterpart of the browser flow: the body is
    /// written to disk and the written path returned.
    pub async fn save_to(&self, dir: &Path) -> Result<PathBuf, DownloadFailed> {
        let bytes = self.fetch().await?;
        let path = dir.join(RESUME_FILENAME);

        if let Err(e) = tokio::fs::write(&path, &bytes).await {
            error!(path = %path.display(), error = %e, "Failed to write resume");
            return Err(DownloadFailed);
        }

        info!(path = %path.display(), bytes = bytes.len(), "Resume saved");
        Ok(path)
    }

    async fn fetch(&self) -> Result<Vec<u8>, DownloadFailed> {
        let response = match self.client.get(&self.endpoint).send().await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Resume request failed");
                return Err(DownloadFailed);
            }
        };

        if !response.status().is_success() {
            error!(status = %response.status(), "Download endpoint reported failure");
            return Err(DownloadFailed);
        }

        match response.bytes().await {
            Ok(bytes) => Ok(bytes.to_vec()),
            Err(e) => {
                error!(error = %e, "Failed to read resume body");
                Err(DownloadFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_endpoint_reports_generic_alert() {
        let downloader = ResumeDownloader::new("http://127.0.0.1:9/api/resume");
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let result = downloader.save_to(dir.path()).await;
        let err = result.expect_err("download should fail");
        assert_eq!(
            err.to_string(),
            "Failed to download resume. Please try again."
        );
    }
}
