// Helpers for running the extraction tool

use std::process::Stdio;

use tokio::io::AsyncReadExt;
use tokio::process::Command as TokioCommand;
use tokio::time::{timeout, Duration};

/// Run a command to completion, capturing stdout/stderr.
///
/// With `timeout_secs = None` the call waits as long as the child runs.
/// On timeout the child is killed.
pub async fn run_output(
    program: &str,
    args: Vec<String>,
    timeout_secs: Option<u64>,
) -> Result<std::process::Output, String> {
    let mut child = TokioCommand::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| format!("Failed to start {}: {}", program, e))?;

    let mut stdout_pipe = child
        .stdout
        .take()
        .ok_or_else(|| format!("Failed to capture stdout from {}", program))?;
    let mut stderr_pipe = child
        .stderr
        .take()
        .ok_or_else(|| format!("Failed to capture stderr from {}", program))?;

    let stdout_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        stdout_pipe
            .read_to_end(&mut buf)
            .await
            .map_err(|e| format!("Failed to read stdout: {}", e))?;
        Ok::<Vec<u8>, String>(buf)
    });
    let stderr_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        stderr_pipe
            .read_to_end(&mut buf)
            .await
            .map_err(|e| format!("Failed to read stderr: {}", e))?;
        Ok::<Vec<u8>, String>(buf)
    });

    let status = match timeout_secs {
        Some(secs) => match timeout(Duration::from_secs(secs), child.wait()).await {
            Ok(status) => status,
            Err(_) => {
                let _ = child.kill().await;
                stdout_task.abort();
                stderr_task.abort();
                return Err(format!("Timed out after {}s", secs));
            }
        },
        None => child.wait().await,
    }
    .map_err(|e| format!("Failed to wait for {}: {}", program, e))?;

    let stdout = stdout_task
        .await
        .map_err(|e| format!("stdout task failed: {}", e))??;
    let stderr = stderr_task
        .await
        .map_err(|e| format!("stderr task failed: {}", e))??;
    Ok(std::process::Output {
        status,
        stdout,
        stderr,
    })
}

/// Last non-empty stderr line, which is where yt-dlp puts its `ERROR:` message
pub fn last_error_line(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    text.lines()
        .rev()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("extractor exited without output")
        .to_string()
}
