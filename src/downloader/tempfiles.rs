// Temporary media files
//
// Every retrieval gets its own directory holding a single `video.mp4`.
// The guard removes both exactly once: either through `release()` or,
// if the owner is dropped early (client abort, error path), through `Drop`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::errors::DownloadError;

/// File name yt-dlp is told to write to
pub const MEDIA_FILE_NAME: &str = "video.mp4";

const DIR_PREFIX: &str = "yt-relay-";

/// Scoped temporary directory + media path
#[derive(Debug)]
pub struct TempMedia {
    dir: Option<TempDir>,
    dir_path: PathBuf,
    path: PathBuf,
}

impl TempMedia {
    /// Create a fresh directory under `root` (or the OS temp dir)
    pub fn allocate(root: Option<&Path>) -> Result<Self, DownloadError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(DIR_PREFIX);
        let dir = match root {
            Some(root) => builder.tempdir_in(root)?,
            None => builder.tempdir()?,
        };

        let dir_path = dir.path().to_path_buf();
        let path = dir_path.join(MEDIA_FILE_NAME);
        tracing::debug!(dir = %dir_path.display(), "allocated temp media dir");

        Ok(Self {
            dir: Some(dir),
            dir_path,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        &self.dir_path
    }

    /// Delete the media file, then the directory
    pub fn release(mut self) -> Result<(), DownloadError> {
        self.release_inner()
    }

    fn release_inner(&mut self) -> Result<(), DownloadError> {
        let Some(dir) = self.dir.take() else {
            return Ok(());
        };

        let file_result = match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        };
        let dir_result = dir.close();
        tracing::debug!(dir = %self.dir_path.display(), "released temp media dir");

        file_result?;
        dir_result?;
        Ok(())
    }
}

impl Drop for TempMedia {
    fn drop(&mut self) {
        if let Err(e) = self.release_inner() {
            tracing::warn!(dir = %self.dir_path.display(), error = %e, "temp media cleanup failed");
        }
    }
}
