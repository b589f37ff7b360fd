pub mod config;
pub mod downloader;
pub mod logging;
pub mod server;

use std::sync::Arc;

use config::AppConfig;
use downloader::extractors::YtDlpExtractor;
use downloader::Downloader;
use server::AppState;

/// Wire the extractor into the HTTP server and run until shutdown
pub async fn run(config: AppConfig) -> std::io::Result<()> {
    let extractor = YtDlpExtractor::new(config.extractor_config());
    let command = extractor.command();
    tracing::info!(
        mode = %command.mode,
        program = %command.program,
        "using yt-dlp"
    );
    if !command.is_available() {
        tracing::warn!(
            program = %command.program,
            "yt-dlp did not answer --version; requests will fail until it is installed"
        );
    }

    let downloader = Downloader::new(Arc::new(extractor), config.temp_root.clone());
    server::serve(AppState::new(downloader), config.bind_addr()).await
}
