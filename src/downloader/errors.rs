// Error types for the relay

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadError {
    /// URL or video id rejected before any extractor call
    InvalidInput(String),

    /// yt-dlp failed for any reason (spawn, non-zero exit, bad JSON, timeout, missing output)
    Extraction(String),

    /// Temporary directory/file could not be created, read or removed
    Filesystem(String),
}

impl DownloadError {
    /// Whether the caller is at fault (maps to a 4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "{}", msg),
            Self::Extraction(msg) => write!(f, "Failed to extract video: {}", msg),
            Self::Filesystem(msg) => write!(f, "Filesystem error: {}", msg),
        }
    }
}

impl std::error::Error for DownloadError {}

impl From<std::io::Error> for DownloadError {
    fn from(e: std::io::Error) -> Self {
        Self::Filesystem(e.to_string())
    }
}
