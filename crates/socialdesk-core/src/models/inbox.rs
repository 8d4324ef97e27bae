use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::post::clamp_limit;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboxMessage {
    pub id: String,
    pub user_id: String,
    pub social_account_id: String,
    pub platform: String,
    /// comment, dm, mention or reply
    pub message_type: String,
    pub platform_message_id: String,
    pub platform_post_id: Option<String>,
    pub sender_id: String,
    pub sender_username: String,
    pub sender_avatar_url: Option<String>,
    pub content: String,
    pub is_read: bool,
    pub is_replied: bool,
    pub sentiment: Option<String>,
    pub received_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboxList {
    pub items: Vec<InboxMessage>,
    pub total: i64,
    pub unread: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UnreadCounts {
    #[serde(default)]
    pub by_platform: HashMap<String, i64>,
    #[serde(default)]
    pub by_type: HashMap<String, i64>,
    pub total: i64,
}

/// Query for `GET /inbox/`
#[derive(Debug, Clone, Default)]
pub struct InboxFilter {
    pub platform: Option<String>,
    pub message_type: Option<String>,
    pub is_read: Option<bool>,
    pub search: Option<String>,
    pub skip: u32,
    pub limit: Option<u32>,
}

impl InboxFilter {
    pub fn unread() -> Self {
        Self {
            is_read: Some(false),
            ..Default::default()
        }
    }

    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(ref platform) = self.platform {
            query.push(("platform".to_string(), platform.clone()));
        }
        if let Some(ref message_type) = self.message_type {
            query.push(("message_type".to_string(), message_type.clone()));
        }
        if let Some(is_read) = self.is_read {
            query.push(("is_read".to_string(), is_read.to_string()));
        }
        if let Some(ref search) = self.search {
            let search = search.trim();
            if !search.is_empty() {
                query.push(("search".to_string(), search.to_string()));
            }
        }
        query.push(("skip".to_string(), self.skip.to_string()));
        query.push(("limit".to_string(), clamp_limit(self.limit).to_string()));
        query
    }
}
