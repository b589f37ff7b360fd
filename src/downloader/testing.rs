// In-process extractor for tests

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::errors::DownloadError;
use super::models::VideoInfo;
use super::traits::MediaExtractor;

/// Writes a fixed payload, or fails after leaving a partial file behind
pub struct StubExtractor {
    payload: Vec<u8>,
    failure: Option<String>,
    calls: AtomicUsize,
    last_dest: Mutex<Option<PathBuf>>,
    last_url: Mutex<Option<String>>,
}

impl StubExtractor {
    pub fn with_payload(payload: Vec<u8>) -> Self {
        Self {
            payload,
            failure: None,
            calls: AtomicUsize::new(0),
            last_dest: Mutex::new(None),
            last_url: Mutex::new(None),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::with_payload(Vec::new())
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_dest(&self) -> Option<PathBuf> {
        self.last_dest.lock().unwrap().clone()
    }

    pub fn last_url(&self) -> Option<String> {
        self.last_url.lock().unwrap().clone()
    }

    fn record(&self, url: &str) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_url.lock().unwrap() = Some(url.to_string());
    }

    fn info(&self) -> VideoInfo {
        VideoInfo {
            title: "Stub Video".to_string(),
            duration: 61,
            video_id: "stub123".to_string(),
            formats: vec![serde_json::json!({"format_id": "18", "ext": "mp4"})],
        }
    }
}

#[async_trait]
impl MediaExtractor for StubExtractor {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn probe(&self, url: &str) -> Result<VideoInfo, DownloadError> {
        self.record(url);
        match &self.failure {
            Some(msg) => Err(DownloadError::Extraction(msg.clone())),
            None => Ok(self.info()),
        }
    }

    async fn download_to(&self, url: &str, dest: &Path) -> Result<VideoInfo, DownloadError> {
        self.record(url);
        *self.last_dest.lock().unwrap() = Some(dest.to_path_buf());

        if let Some(msg) = &self.failure {
            std::fs::write(dest, b"partial").unwrap();
            return Err(DownloadError::Extraction(msg.clone()));
        }
        std::fs::write(dest, &self.payload).unwrap();
        Ok(self.info())
    }
}
