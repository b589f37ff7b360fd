// Extraction adapter: metadata probes and temp-file downloads

use std::path::PathBuf;
use std::sync::Arc;

use super::errors::DownloadError;
use super::models::VideoInfo;
use super::tempfiles::TempMedia;
use super::traits::MediaExtractor;

/// A finished download still owned by the request
#[derive(Debug)]
pub struct FetchedMedia {
    pub media: TempMedia,
    pub title: String,
}

pub struct Downloader {
    extractor: Arc<dyn MediaExtractor>,
    temp_root: Option<PathBuf>,
}

impl Downloader {
    pub fn new(extractor: Arc<dyn MediaExtractor>, temp_root: Option<PathBuf>) -> Self {
        Self {
            extractor,
            temp_root,
        }
    }

    pub async fn get_metadata(&self, url: &str) -> Result<VideoInfo, DownloadError> {
        self.extractor.probe(url).await
    }

    /// Download into a fresh temp dir.
    ///
    /// If the extractor fails, the temp dir is dropped (and removed) before
    /// the error is returned.
    pub async fn fetch_media(&self, url: &str) -> Result<FetchedMedia, DownloadError> {
        let media = TempMedia::allocate(self.temp_root.as_deref())?;
        let info = self.extractor.download_to(url, media.path()).await?;

        tracing::debug!(
            backend = self.extractor.name(),
            path = %media.path().display(),
            "media downloaded"
        );
        Ok(FetchedMedia {
            media,
            title: info.title,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::downloader::testing::StubExtractor;

    #[tokio::test]
    async fn test_fetch_media_returns_complete_file() {
        let root = tempfile::tempdir().unwrap();
        let stub = Arc::new(StubExtractor::with_payload(b"abc".to_vec()));
        let downloader = Downloader::new(stub.clone(), Some(root.path().to_path_buf()));

        let fetched = downloader.fetch_media("https://youtu.be/abc").await.unwrap();
        assert_eq!(fetched.title, "Stub Video");
        assert_eq!(std::fs::read(fetched.media.path()).unwrap(), b"abc");
        assert!(fetched.media.dir().starts_with(root.path()));

        let dir = fetched.media.dir().to_path_buf();
        fetched.media.release().unwrap();
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_no_temp_dir() {
        let root = tempfile::tempdir().unwrap();
        let stub = Arc::new(StubExtractor::failing("ERROR: Video unavailable"));
        let downloader = Downloader::new(stub.clone(), Some(root.path().to_path_buf()));

        let err = downloader.fetch_media("https://youtu.be/nope").await.unwrap_err();
        assert_eq!(err, DownloadError::Extraction("ERROR: Video unavailable".into()));

        let dest = stub.last_dest().unwrap();
        assert!(!dest.exists());
        assert!(!dest.parent().unwrap().exists());
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_get_metadata_passes_through() {
        let stub = Arc::new(StubExtractor::with_payload(Vec::new()));
        let downloader = Downloader::new(stub.clone(), None);

        let info = downloader.get_metadata("https://youtu.be/abc").await.unwrap();
        assert_eq!(info.video_id, "stub123");
        assert_eq!(stub.calls(), 1);
    }
}
