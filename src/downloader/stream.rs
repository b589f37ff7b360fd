// Chunked media stream
//
// Single-pass, finite sequence of fixed-size chunks read from a temp media
// file. The file handle is closed before the temp dir is released. Dropping
// the stream early (client went away) still releases through `TempMedia`'s Drop.

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use futures::stream::{self, BoxStream, Stream, StreamExt};
use tokio::fs::File;
use tokio::io::AsyncReadExt;

use super::errors::DownloadError;
use super::tempfiles::TempMedia;

/// Bytes per yielded chunk; only the final chunk may be shorter
pub const CHUNK_SIZE: usize = 8192;

pub struct MediaChunks {
    inner: BoxStream<'static, io::Result<Bytes>>,
}

impl MediaChunks {
    /// Open the media file and take ownership of its temp dir
    pub async fn open(media: TempMedia) -> Result<Self, DownloadError> {
        let file = File::open(media.path()).await?;
        Ok(Self::from_parts(file, media))
    }

    fn from_parts(file: File, media: TempMedia) -> Self {
        let inner = stream::unfold(Some((file, media)), |state| async move {
            let Some((mut file, media)) = state else {
                return None;
            };
            match read_chunk(&mut file).await {
                Ok(chunk) if !chunk.is_empty() => Some((Ok(chunk), Some((file, media)))),
                Ok(_) => {
                    drop(file);
                    finish(media);
                    None
                }
                Err(e) => {
                    drop(file);
                    finish(media);
                    Some((Err(e), None))
                }
            }
        })
        .boxed();

        Self { inner }
    }
}

impl Stream for MediaChunks {
    type Item = io::Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.poll_next_unpin(cx)
    }
}

/// Fill up to `CHUNK_SIZE` bytes, stopping early only at EOF
async fn read_chunk(file: &mut File) -> io::Result<Bytes> {
    let mut buf = BytesMut::with_capacity(CHUNK_SIZE);
    while buf.len() < CHUNK_SIZE {
        if file.read_buf(&mut buf).await? == 0 {
            break;
        }
    }
    Ok(buf.freeze())
}

fn finish(media: TempMedia) {
    if let Err(e) = media.release() {
        tracing::warn!(error = %e, "failed to release streamed media");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn media_with(root: &std::path::Path, len: usize) -> (TempMedia, Vec<u8>, PathBuf) {
        let media = TempMedia::allocate(Some(root)).unwrap();
        let payload: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
        std::fs::write(media.path(), &payload).unwrap();
        let dir = media.dir().to_path_buf();
        (media, payload, dir)
    }

    #[tokio::test]
    async fn test_chunks_reassemble_and_are_full_sized() {
        let root = tempfile::tempdir().unwrap();
        let (media, payload, dir) = media_with(root.path(), CHUNK_SIZE * 3 + 100);

        let chunks: Vec<Bytes> = MediaChunks::open(media)
            .await
            .unwrap()
            .map(|c| c.unwrap())
            .collect()
            .await;

        assert_eq!(chunks.len(), 4);
        for chunk in &chunks[..3] {
            assert_eq!(chunk.len(), CHUNK_SIZE);
        }
        assert_eq!(chunks[3].len(), 100);
        assert_eq!(chunks.concat(), payload);
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn test_exact_multiple_has_no_short_tail() {
        let root = tempfile::tempdir().unwrap();
        let (media, payload, dir) = media_with(root.path(), CHUNK_SIZE * 2);

        let chunks: Vec<Bytes> = MediaChunks::open(media)
            .await
            .unwrap()
            .map(|c| c.unwrap())
            .collect()
            .await;

        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.len() == CHUNK_SIZE));
        assert_eq!(chunks.concat(), payload);
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn test_empty_file_yields_nothing() {
        let root = tempfile::tempdir().unwrap();
        let (media, _, dir) = media_with(root.path(), 0);

        let mut chunks = MediaChunks::open(media).await.unwrap();
        assert!(chunks.next().await.is_none());
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn test_dropping_midway_still_cleans_up() {
        let root = tempfile::tempdir().unwrap();
        let (media, _, dir) = media_with(root.path(), CHUNK_SIZE * 4);

        let mut chunks = MediaChunks::open(media).await.unwrap();
        let first = chunks.next().await.unwrap().unwrap();
        assert_eq!(first.len(), CHUNK_SIZE);
        assert!(dir.exists());

        drop(chunks);
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn test_open_missing_file_is_filesystem_error() {
        let root = tempfile::tempdir().unwrap();
        let media = TempMedia::allocate(Some(root.path())).unwrap();
        let dir = media.dir().to_path_buf();

        let err = MediaChunks::open(media).await.err().unwrap();
        assert!(matches!(err, DownloadError::Filesystem(_)));
        assert!(!dir.exists());
    }
}
