// Extractor configuration

use std::fmt;

use clap::ValueEnum;

/// Default yt-dlp format selector: best single file with audio+video in MP4
pub const DEFAULT_FORMAT: &str = "best[ext=mp4]";

/// How yt-dlp is invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExtractorMode {
    /// Python module yt_dlp (`python3 -m yt_dlp`)
    Python,
    /// CLI binary yt-dlp
    Cli,
    /// Python if the module imports, otherwise CLI
    #[default]
    Auto,
}

impl fmt::Display for ExtractorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Python => write!(f, "python"),
            Self::Cli => write!(f, "cli"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

/// Immutable settings shared by every extraction call
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub mode: ExtractorMode,
    /// Explicit yt-dlp binary, skips discovery
    pub ytdlp_path: Option<String>,
    /// Format selector passed as `--format`
    pub format: String,
    /// SOCKS5/HTTP proxy URL
    pub proxy: Option<String>,
    /// Upper bound per child process; `None` waits indefinitely
    pub timeout_seconds: Option<u64>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            mode: ExtractorMode::Auto,
            ytdlp_path: None,
            format: DEFAULT_FORMAT.to_string(),
            proxy: None,
            timeout_seconds: None,
        }
    }
}

impl ExtractorConfig {
    pub fn with_mode(mut self, mode: ExtractorMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_ytdlp_path(mut self, path: Option<String>) -> Self {
        self.ytdlp_path = path;
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_proxy(mut self, proxy: Option<String>) -> Self {
        self.proxy = proxy;
        self
    }

    pub fn with_timeout(mut self, seconds: Option<u64>) -> Self {
        self.timeout_seconds = seconds;
        self
    }
}
