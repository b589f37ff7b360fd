// Data models shared by the extractor and the HTTP layer

use serde::{Deserialize, Serialize};

/// Video information as returned by `/info`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub title: String,
    /// Duration in whole seconds
    pub duration: u64,
    pub video_id: String,
    /// yt-dlp format descriptors, passed through untouched
    pub formats: Vec<serde_json::Value>,
}

impl VideoInfo {
    /// Build from a yt-dlp `--dump-json` document
    pub fn from_ytdlp_json(json: &serde_json::Value) -> Self {
        Self {
            title: json["title"].as_str().unwrap_or("Unknown").to_string(),
            duration: json["duration"].as_f64().unwrap_or(0.0).max(0.0) as u64,
            video_id: json["id"].as_str().unwrap_or("unknown").to_string(),
            formats: json["formats"].as_array().cloned().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_ytdlp_json() {
        let doc = json!({
            "id": "dQw4w9WgXcQ",
            "title": "Never Gonna Give You Up",
            "duration": 212.0,
            "formats": [
                {"format_id": "18", "ext": "mp4", "vcodec": "avc1.42001E", "acodec": "mp4a.40.2"},
                {"format_id": "140", "ext": "m4a", "tbr": 129.5}
            ],
            "uploader": "Rick Astley"
        });

        let info = VideoInfo::from_ytdlp_json(&doc);
        assert_eq!(info.video_id, "dQw4w9WgXcQ");
        assert_eq!(info.title, "Never Gonna Give You Up");
        assert_eq!(info.duration, 212);
        assert_eq!(info.formats.len(), 2);
        assert_eq!(info.formats[1]["tbr"], json!(129.5));
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let info = VideoInfo::from_ytdlp_json(&json!({"duration": -3}));
        assert_eq!(info.title, "Unknown");
        assert_eq!(info.video_id, "unknown");
        assert_eq!(info.duration, 0);
        assert!(info.formats.is_empty());
    }

    #[test]
    fn test_serializes_with_expected_keys() {
        let info = VideoInfo {
            title: "t".into(),
            duration: 5,
            video_id: "abc".into(),
            formats: vec![],
        };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value, json!({"title": "t", "duration": 5, "video_id": "abc", "formats": []}));
    }
}
