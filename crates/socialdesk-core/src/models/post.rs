use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::truncate_string;

/// Largest page the backend serves for list endpoints
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page size used when none is requested
pub const DEFAULT_PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPlatformStatus {
    pub id: String,
    pub platform: String,
    pub platform_username: String,
    pub status: String,
    pub error_message: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub caption: String,
    #[serde(default)]
    pub hashtags: Option<Vec<String>>,
    pub status: String,
    pub post_type: String,
    #[serde(default)]
    pub ai_generated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub platforms: Vec<PostPlatformStatus>,
}

impl Post {
    /// First line of the caption, shortened for list views
    pub fn caption_preview(&self, max_len: usize) -> String {
        let first_line = self.caption.lines().next().unwrap_or_default();
        truncate_string(first_line, max_len)
    }

    /// Comma separated platform handles, e.g. "twitter:@acme, instagram:@acme"
    pub fn platforms_display(&self) -> String {
        if self.platforms.is_empty() {
            return "-".to_string();
        }
        self.platforms
            .iter()
            .map(|p| format!("{}:@{}", p.platform, p.platform_username))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Platform deliveries that ended in an error
    pub fn failed_platforms(&self) -> Vec<&PostPlatformStatus> {
        self.platforms.iter().filter(|p| p.status == "failed").collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostList {
    pub items: Vec<Post>,
    pub total: i64,
}

/// Body for `POST /posts/`
#[derive(Debug, Clone, Serialize, Default)]
pub struct NewPost {
    pub caption: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
    pub post_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_ids: Option<Vec<String>>,
    pub account_ids: Vec<String>,
    /// account_id -> caption override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_captions: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_time: Option<DateTime<Utc>>,
    pub publish_now: bool,
}

impl NewPost {
    pub fn new(caption: impl Into<String>, account_ids: Vec<String>) -> Self {
        Self {
            caption: caption.into(),
            post_type: "feed".to_string(),
            account_ids,
            ..Default::default()
        }
    }

    pub fn scheduled_for(mut self, at: DateTime<Utc>) -> Self {
        self.schedule_time = Some(at);
        self.publish_now = false;
        self
    }

    pub fn publish_now(mut self) -> Self {
        self.schedule_time = None;
        self.publish_now = true;
        self
    }
}

/// Query for `GET /posts/`
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub status: Option<String>,
    pub skip: u32,
    pub limit: Option<u32>,
}

impl PostFilter {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(ref status) = self.status {
            query.push(("status".to_string(), status.clone()));
        }
        query.push(("skip".to_string(), self.skip.to_string()));
        query.push(("limit".to_string(), clamp_limit(self.limit).to_string()));
        query
    }
}

/// Clamp a requested page size to what list endpoints accept
pub fn clamp_limit(limit: Option<u32>) -> u32 {
    limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        serde_json::from_value(serde_json::json!({
            "id": "p1",
            "caption": "Launch day is here!\nMore details soon",
            "hashtags": ["launch"],
            "status": "partially_published",
            "post_type": "feed",
            "ai_generated": false,
            "created_at": "2025-03-01T10:00:00Z",
            "updated_at": "2025-03-01T10:05:00Z",
            "platforms": [
                {"id": "pp1", "platform": "twitter", "platform_username": "acme", "status": "published"},
                {"id": "pp2", "platform": "instagram", "platform_username": "acme.co", "status": "failed",
                 "error_message": "Media too large"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_caption_preview_uses_first_line() {
        let post = sample_post();
        assert_eq!(post.caption_preview(40), "Launch day is here!");
        assert_eq!(post.caption_preview(10), "Launch ...");
    }

    #[test]
    fn test_platforms_display_and_failures() {
        let post = sample_post();
        assert_eq!(post.platforms_display(), "twitter:@acme, instagram:@acme.co");
        let failed = post.failed_platforms();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].error_message.as_deref(), Some("Media too large"));
    }

    #[test]
    fn test_filter_query_clamps_limit() {
        let filter = PostFilter {
            status: Some("scheduled".into()),
            skip: 10,
            limit: Some(500),
        };
        assert_eq!(
            filter.to_query(),
            vec![
                ("status".to_string(), "scheduled".to_string()),
                ("skip".to_string(), "10".to_string()),
                ("limit".to_string(), "100".to_string()),
            ]
        );
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(None), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_new_post_serialization_skips_empty_options() {
        let post = NewPost::new("hello", vec!["acc-1".into()]).publish_now();
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["post_type"], "feed");
        assert_eq!(json["publish_now"], true);
        assert!(json.get("schedule_time").is_none());
        assert!(json.get("media_ids").is_none());
    }
}
