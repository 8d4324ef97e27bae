use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MAX_COMMENT_CHARS: usize = 2200;
pub const MAX_COMMENT_DELAY_SECS: u32 = 3600;

#[derive(Debug, Clone, Serialize)]
pub struct NewFirstComment {
    pub post_platform_id: String,
    pub comment_text: String,
    pub delay_seconds: u32,
}

impl NewFirstComment {
    pub fn new(post_platform_id: impl Into<String>, comment_text: impl Into<String>) -> Self {
        Self {
            post_platform_id: post_platform_id.into(),
            comment_text: comment_text.into(),
            delay_seconds: 5,
        }
    }
}

/// Comment posted under a published post once it goes live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirstComment {
    pub id: String,
    pub post_platform_id: String,
    pub comment_text: String,
    pub delay_seconds: u32,
    pub status: String,
    pub platform_comment_id: Option<String>,
    pub error_message: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
