// Locating yt-dlp
//
// Two ways to run it:
// - Python mode: `python3 -m yt_dlp` (same engine as the library, interpreter
//   overridable through YTDLP_PYTHON)
// - CLI mode: native `yt-dlp` binary from common install paths or PATH

use std::process::Command as StdCommand;

use super::traits::{ExtractorConfig, ExtractorMode};

/// Program plus leading arguments that together mean "yt-dlp"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YtDlpCommand {
    pub program: String,
    pub prefix: Vec<String>,
    pub mode: ExtractorMode,
}

impl YtDlpCommand {
    pub fn cli(path: impl Into<String>) -> Self {
        Self {
            program: path.into(),
            prefix: Vec::new(),
            mode: ExtractorMode::Cli,
        }
    }

    pub fn python(interpreter: impl Into<String>) -> Self {
        Self {
            program: interpreter.into(),
            prefix: vec!["-m".to_string(), "yt_dlp".to_string()],
            mode: ExtractorMode::Python,
        }
    }

    /// Pick a concrete command for `config.mode`
    pub fn resolve(config: &ExtractorConfig) -> Self {
        let cli = || YtDlpCommand::cli(config.ytdlp_path.clone().unwrap_or_else(find_ytdlp));

        match config.mode {
            ExtractorMode::Cli => cli(),
            ExtractorMode::Python => YtDlpCommand::python(find_python()),
            ExtractorMode::Auto => {
                if config.ytdlp_path.is_some() {
                    return cli();
                }
                let python = find_python();
                if python_has_ytdlp(&python) {
                    YtDlpCommand::python(python)
                } else {
                    tracing::debug!("python module yt_dlp not importable, using yt-dlp binary");
                    cli()
                }
            }
        }
    }

    /// Full argument list: prefix followed by `args`
    pub fn args_with(&self, args: Vec<String>) -> Vec<String> {
        let mut full = self.prefix.clone();
        full.extend(args);
        full
    }

    /// Whether `--version` runs successfully
    pub fn is_available(&self) -> bool {
        match StdCommand::new(&self.program)
            .args(self.args_with(vec!["--version".to_string()]))
            .output()
        {
            Ok(out) => out.status.success(),
            Err(_) => false,
        }
    }
}

fn find_python() -> String {
    if let Ok(custom) = std::env::var("YTDLP_PYTHON") {
        return custom;
    }

    let candidates = ["python3", "/opt/homebrew/bin/python3", "/usr/local/bin/python3"];
    for cmd in candidates {
        if let Ok(output) = StdCommand::new(cmd).arg("--version").output() {
            if output.status.success() {
                return cmd.to_string();
            }
        }
    }

    "python3".to_string()
}

fn python_has_ytdlp(python: &str) -> bool {
    match StdCommand::new(python).args(["-c", "import yt_dlp"]).output() {
        Ok(out) => out.status.success(),
        Err(_) => false,
    }
}

fn find_ytdlp() -> String {
    let common_paths = [
        "/opt/homebrew/bin/yt-dlp", // Homebrew on Apple Silicon
        "/usr/local/bin/yt-dlp",    // Homebrew on Intel Mac
        "/usr/bin/yt-dlp",
    ];

    for path in common_paths {
        if std::path::Path::new(path).exists() {
            return path.to_string();
        }
    }

    if let Ok(output) = StdCommand::new("which").arg("yt-dlp").output() {
        if output.status.success() {
            if let Ok(path) = String::from_utf8(output.stdout) {
                let trimmed = path.trim();
                if !trimmed.is_empty() {
                    return trimmed.to_string();
                }
            }
        }
    }

    // Last resort: hope it's in PATH
    "yt-dlp".to_string()
}
