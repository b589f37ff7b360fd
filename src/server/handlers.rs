// Route handlers

use axum::body::Body;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, RawQuery, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Json, Response};

use super::error::ApiError;
use super::AppState;
use crate::downloader::validate::{is_valid_video_id, is_valid_youtube_url, watch_url};
use crate::downloader::{DownloadError, FetchedMedia, MediaChunks, VideoInfo};

const VIDEO_MIME: &str = "video/mp4";

/// GET /info/{*video_url}
pub async fn get_info(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    RawQuery(query): RawQuery,
) -> Result<Json<VideoInfo>, ApiError> {
    let Path(raw) = path.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let url = reassemble_url(&raw, query.as_deref());

    if !is_valid_youtube_url(&url) {
        return Err(DownloadError::InvalidInput("Invalid YouTube URL".to_string()).into());
    }

    let info = state.downloader.get_metadata(&url).await?;
    Ok(Json(info))
}

/// GET /stream/{video_id}
pub async fn stream_video(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Result<Response, ApiError> {
    let fetched = fetch_by_id(&state, &video_id).await?;
    let chunks = MediaChunks::open(fetched.media).await?;

    Ok(([(CONTENT_TYPE, VIDEO_MIME)], Body::from_stream(chunks)).into_response())
}

/// GET /download/{video_id}
pub async fn download_video(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Result<Response, ApiError> {
    let fetched = fetch_by_id(&state, &video_id).await?;
    let bytes = tokio::fs::read(fetched.media.path())
        .await
        .map_err(DownloadError::from)?;
    fetched.media.release()?;

    let disposition = HeaderValue::from_str(&content_disposition(&fetched.title))
        .map_err(|e| DownloadError::Filesystem(format!("bad attachment name: {}", e)))?;

    Ok((
        [
            (CONTENT_TYPE, HeaderValue::from_static(VIDEO_MIME)),
            (CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

async fn fetch_by_id(state: &AppState, video_id: &str) -> Result<FetchedMedia, DownloadError> {
    if !is_valid_video_id(video_id) {
        return Err(DownloadError::InvalidInput("Invalid video id".to_string()));
    }
    state.downloader.fetch_media(&watch_url(video_id)).await
}

/// Undo the client's `encodeURIComponent` and re-attach an unencoded query
fn reassemble_url(raw: &str, query: Option<&str>) -> String {
    let mut url = match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    };
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// `attachment` header with an ASCII fallback and an RFC 5987 UTF-8 name
fn content_disposition(title: &str) -> String {
    let filename = format!("{}.mp4", title);
    let ascii: String = filename
        .chars()
        .map(|c| match c {
            '"' | '\\' | '/' => '_',
            c if c.is_ascii() && !c.is_ascii_control() => c,
            _ => '_',
        })
        .collect();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        ascii,
        urlencoding::encode(&filename)
    )
}
