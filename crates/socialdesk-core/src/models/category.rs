use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub color: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub is_recyclable: bool,
    pub recycle_interval_days: i32,
    #[serde(default)]
    pub post_count: i64,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn recycle_display(&self) -> String {
        if self.is_recyclable {
            format!("every {}d", self.recycle_interval_days)
        } else {
            "off".to_string()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewCategory {
    pub name: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_recyclable: bool,
    pub recycle_interval_days: i32,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: "#3b82f6".to_string(),
            icon: None,
            description: None,
            is_recyclable: false,
            recycle_interval_days: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct CategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recyclable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recycle_interval_days: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecycleQueueItem {
    pub id: String,
    pub post_id: String,
    pub post_title: String,
    pub category_id: String,
    pub category_name: String,
    pub scheduled_for: DateTime<Utc>,
    pub status: String,
    pub times_recycled: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecyclablePost {
    pub post_id: String,
    pub caption: String,
    pub category_id: String,
    pub category_name: String,
    pub last_published_at: Option<DateTime<Utc>>,
    pub recycle_interval_days: i32,
}

impl RecyclablePost {
    /// Date the post becomes eligible again, if it has been published
    pub fn next_eligible_at(&self) -> Option<DateTime<Utc>> {
        self.last_published_at
            .map(|at| at + chrono::Duration::days(i64::from(self.recycle_interval_days)))
    }
}

/// `{"items": [...]}` envelope used by the category endpoints
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Items<T> {
    pub items: Vec<T>,
}
