// Extractor trait definition

use std::path::Path;

use async_trait::async_trait;

use super::errors::DownloadError;
use super::models::VideoInfo;

/// Backend that resolves a page URL into metadata and media bytes
#[async_trait]
pub trait MediaExtractor: Send + Sync {
    /// Name of the backend (for logging)
    fn name(&self) -> &'static str;

    /// Metadata-only probe, no media bytes fetched
    async fn probe(&self, url: &str) -> Result<VideoInfo, DownloadError>;

    /// Probe and download the media to `dest`.
    ///
    /// On `Ok`, `dest` holds the complete file and is no longer being written.
    async fn download_to(&self, url: &str, dest: &Path) -> Result<VideoInfo, DownloadError>;
}
