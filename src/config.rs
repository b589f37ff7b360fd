// Process configuration: CLI flags with env fallbacks

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

use crate::downloader::extractors::{ExtractorConfig, ExtractorMode, DEFAULT_FORMAT};
use crate::logging::LogLevel;

#[derive(Debug, Clone, Parser)]
#[command(name = "yt-relay")]
#[command(about = "Fetch YouTube metadata and relay the video over HTTP")]
pub struct AppConfig {
    /// Address to bind
    #[arg(long, env = "YT_RELAY_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "YT_RELAY_PORT", default_value_t = 3000)]
    pub port: u16,

    /// How to invoke yt-dlp
    #[arg(long, env = "YT_RELAY_EXTRACTOR", value_enum, default_value_t = ExtractorMode::Auto)]
    pub extractor: ExtractorMode,

    /// Path to the yt-dlp binary (skips discovery)
    #[arg(long, env = "YT_RELAY_YTDLP_PATH")]
    pub ytdlp_path: Option<String>,

    /// yt-dlp format selector
    #[arg(long, env = "YT_RELAY_FORMAT", default_value = DEFAULT_FORMAT)]
    pub format: String,

    /// Proxy passed to yt-dlp (e.g. socks5://127.0.0.1:1080)
    #[arg(long, env = "YT_RELAY_PROXY")]
    pub proxy: Option<String>,

    /// Kill yt-dlp after this many seconds (default: wait indefinitely)
    #[arg(long, env = "YT_RELAY_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Parent directory for per-request temp dirs (default: OS temp dir)
    #[arg(long, env = "YT_RELAY_TEMP_ROOT")]
    pub temp_root: Option<PathBuf>,

    /// Console log level; RUST_LOG takes precedence
    #[arg(long, env = "YT_RELAY_LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl AppConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig::default()
            .with_mode(self.extractor)
            .with_ytdlp_path(self.ytdlp_path.clone())
            .with_format(self.format.clone())
            .with_proxy(self.proxy.clone())
            .with_timeout(self.timeout_secs)
    }
}
