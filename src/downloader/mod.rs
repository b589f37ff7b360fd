// Downloader module: validation, yt-dlp extraction, temp media lifecycle

pub mod errors;
pub mod extractors;
pub mod models;
pub mod orchestrator;
pub mod stream;
pub mod tempfiles;
pub mod traits;
pub mod utils;
pub mod validate;

#[cfg(test)]
pub mod testing;

pub use errors::DownloadError;
pub use models::VideoInfo;
pub use orchestrator::{Downloader, FetchedMedia};
pub use stream::{MediaChunks, CHUNK_SIZE};
pub use tempfiles::TempMedia;
pub use traits::MediaExtractor;
