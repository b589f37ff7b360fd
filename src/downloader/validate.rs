// URL and video id validation

use regex::Regex;

lazy_static::lazy_static! {
    static ref YOUTUBE_URL_RE: Regex =
        Regex::new(r"^(https?://)?(www\.)?(youtube\.com|youtu\.be)/.+$").unwrap();
    static ref VIDEO_ID_RE: Regex = Regex::new(r"^[A-Za-z0-9_-]{1,64}$").unwrap();
}

/// Check that `url` points at a supported video host (youtube.com / youtu.be)
pub fn is_valid_youtube_url(url: &str) -> bool {
    YOUTUBE_URL_RE.is_match(url)
}

/// Check that `id` is safe to splice into a watch URL
pub fn is_valid_video_id(id: &str) -> bool {
    VIDEO_ID_RE.is_match(id)
}

/// Canonical watch URL for a video id
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}
