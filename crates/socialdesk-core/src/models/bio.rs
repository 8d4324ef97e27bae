use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest slug the backend accepts
const MAX_SLUG_LENGTH: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BioLink {
    pub id: String,
    pub bio_page_id: String,
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
    pub thumbnail_url: Option<String>,
    pub position: i32,
    pub is_active: bool,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BioPage {
    pub id: String,
    pub user_id: String,
    pub slug: String,
    pub title: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub theme: String,
    pub bg_color: String,
    pub text_color: String,
    pub button_style: String,
    pub is_published: bool,
    pub total_views: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub links: Vec<BioLink>,
}

impl BioPage {
    /// Links in display order
    pub fn ordered_links(&self) -> Vec<&BioLink> {
        let mut links: Vec<&BioLink> = self.links.iter().collect();
        links.sort_by_key(|l| l.position);
        links
    }

    pub fn total_clicks(&self) -> i64 {
        self.links.iter().map(|l| l.click_count).sum()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewBioPage {
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub theme: String,
    pub bg_color: String,
    pub text_color: String,
    pub button_style: String,
}

impl NewBioPage {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            bio: None,
            avatar_url: None,
            theme: "default".to_string(),
            bg_color: "#ffffff".to_string(),
            text_color: "#000000".to_string(),
            button_style: "rounded".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct BioPageUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewBioLink {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct BioLinkUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicBioLink {
    pub id: String,
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
    pub thumbnail_url: Option<String>,
    pub position: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicBioPage {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub theme: String,
    pub bg_color: String,
    pub text_color: String,
    pub button_style: String,
    #[serde(default)]
    pub links: Vec<PublicBioLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClicksByDay {
    pub date: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickAnalytics {
    pub link_id: String,
    pub link_title: String,
    pub total_clicks: i64,
    #[serde(default)]
    pub clicks_by_day: Vec<ClicksByDay>,
}

/// Slugs are 1-100 characters of `[A-Za-z0-9_-]`.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= MAX_SLUG_LENGTH
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
