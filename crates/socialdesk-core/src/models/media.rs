use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaAsset {
    pub id: String,
    pub file_name: String,
    pub file_path: String,
    pub file_size: i64,
    pub mime_type: String,
    pub media_type: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub duration_seconds: Option<f64>,
    pub thumbnail_path: Option<String>,
    pub alt_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MediaAsset {
    /// "1920x1080" when dimensions are known
    pub fn dimensions(&self) -> Option<String> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(format!("{}x{}", w, h)),
            _ => None,
        }
    }

    /// Human readable size, e.g. "2.4 MB"
    pub fn size_display(&self) -> String {
        const KB: f64 = 1024.0;
        const MB: f64 = KB * 1024.0;
        let size = self.file_size as f64;
        if size >= MB {
            format!("{:.1} MB", size / MB)
        } else if size >= KB {
            format!("{:.1} KB", size / KB)
        } else {
            format!("{} B", self.file_size)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaList {
    pub items: Vec<MediaAsset>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_and_dimensions() {
        let asset: MediaAsset = serde_json::from_value(serde_json::json!({
            "id": "m1",
            "file_name": "launch.png",
            "file_path": "uploads/images/launch.png",
            "file_size": 2_516_582,
            "mime_type": "image/png",
            "media_type": "image",
            "width": 1920,
            "height": 1080,
            "created_at": "2025-02-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(asset.size_display(), "2.4 MB");
        assert_eq!(asset.dimensions().as_deref(), Some("1920x1080"));

        let small = MediaAsset { file_size: 512, width: None, ..asset };
        assert_eq!(small.size_display(), "512 B");
        assert!(small.dimensions().is_none());
    }
}
