// yt-dlp backed extractor
//
// Both operations go through `--dump-json`; downloads add `--no-simulate`
// and an explicit output path so the info document and the file come from
// the same invocation.

use std::path::Path;

use async_trait::async_trait;

use super::command::YtDlpCommand;
use super::traits::{ExtractorConfig, ExtractorMode};
use crate::downloader::errors::DownloadError;
use crate::downloader::models::VideoInfo;
use crate::downloader::traits::MediaExtractor;
use crate::downloader::utils::{last_error_line, run_output};

pub struct YtDlpExtractor {
    command: YtDlpCommand,
    config: ExtractorConfig,
}

impl YtDlpExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        let command = YtDlpCommand::resolve(&config);
        Self::with_command(command, config)
    }

    pub fn with_command(command: YtDlpCommand, config: ExtractorConfig) -> Self {
        Self { command, config }
    }

    pub fn command(&self) -> &YtDlpCommand {
        &self.command
    }

    /// Build command arguments; `dest` switches from probe to download
    fn build_args(&self, url: &str, dest: Option<&Path>) -> Vec<String> {
        let mut args = vec![
            "--format".to_string(),
            self.config.format.clone(),
            "--no-playlist".to_string(),
            "--no-warnings".to_string(),
            "--dump-json".to_string(),
        ];

        if let Some(dest) = dest {
            args.push("--no-simulate".to_string());
            args.push("--no-progress".to_string());
            args.push("--output".to_string());
            args.push(dest.to_string_lossy().to_string());
        }

        if let Some(proxy) = &self.config.proxy {
            args.push("--proxy".to_string());
            args.push(proxy.clone());
        }

        args.push("--".to_string());
        args.push(url.to_string());
        self.command.args_with(args)
    }

    async fn run(&self, url: &str, dest: Option<&Path>) -> Result<VideoInfo, DownloadError> {
        let args = self.build_args(url, dest);
        tracing::debug!(program = %self.command.program, args = ?args, "running yt-dlp");

        let out = run_output(&self.command.program, args, self.config.timeout_seconds)
            .await
            .map_err(DownloadError::Extraction)?;

        if !out.status.success() {
            let message = last_error_line(&out.stderr);
            tracing::debug!(status = ?out.status, %message, "yt-dlp failed");
            return Err(DownloadError::Extraction(message));
        }

        parse_stdout(&out.stdout)
    }
}

/// Parse the first JSON document yt-dlp printed
fn parse_stdout(stdout: &[u8]) -> Result<VideoInfo, DownloadError> {
    let text = String::from_utf8_lossy(stdout);
    let line = text
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .ok_or_else(|| DownloadError::Extraction("yt-dlp printed no metadata".to_string()))?;

    let json: serde_json::Value = serde_json::from_str(line)
        .map_err(|e| DownloadError::Extraction(format!("Invalid JSON: {}", e)))?;
    Ok(VideoInfo::from_ytdlp_json(&json))
}

#[async_trait]
impl MediaExtractor for YtDlpExtractor {
    fn name(&self) -> &'static str {
        match self.command.mode {
            ExtractorMode::Python => "python-yt-dlp",
            _ => "cli-yt-dlp",
        }
    }

    async fn probe(&self, url: &str) -> Result<VideoInfo, DownloadError> {
        self.run(url, None).await
    }

    async fn download_to(&self, url: &str, dest: &Path) -> Result<VideoInfo, DownloadError> {
        let info = self.run(url, Some(dest)).await?;

        match tokio::fs::metadata(dest).await {
            Ok(meta) if meta.is_file() => Ok(info),
            _ => Err(DownloadError::Extraction(format!(
                "yt-dlp finished but {} was not written",
                dest.display()
            ))),
        }
    }
}
