use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct CaptionRequest {
    pub description: String,
    pub platforms: Vec<String>,
    /// professional, casual, funny or inspirational
    pub tone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

impl CaptionRequest {
    pub fn new(description: impl Into<String>, platforms: Vec<String>) -> Self {
        Self {
            description: description.into(),
            platforms,
            tone: "professional".to_string(),
            keywords: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionResponse {
    /// Platform name to caption
    pub captions: HashMap<String, String>,
    pub variations: Option<Vec<HashMap<String, String>>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HashtagRequest {
    pub caption: String,
    pub platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashtagSuggestions {
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub broad: Vec<String>,
    #[serde(default)]
    pub niche: Vec<String>,
}

impl HashtagSuggestions {
    /// Space-separated, `#`-prefixed, ready to paste into a caption
    pub fn joined(&self) -> String {
        self.hashtags
            .iter()
            .map(|tag| {
                if tag.starts_with('#') {
                    tag.clone()
                } else {
                    format!("#{}", tag)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarRequest {
    /// ISO date
    pub start_date: String,
    /// ISO date
    pub end_date: String,
    pub platforms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_themes: Option<Vec<String>>,
    pub posts_per_day: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarSlot {
    pub date: String,
    pub time: String,
    pub platform: String,
    pub content_type: String,
    pub theme: String,
    pub suggested_caption: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CalendarResponse {
    pub slots: Vec<CalendarSlot>,
}
