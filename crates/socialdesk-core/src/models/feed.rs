use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default number of grid slots in a feed preview
pub const DEFAULT_GRID_SLOTS: u32 = 18;
pub const MIN_GRID_SLOTS: u32 = 3;
pub const MAX_GRID_SLOTS: u32 = 60;

/// One tile of the three-column feed grid preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedGridItem {
    pub post_id: String,
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub caption_preview: String,
    /// published, scheduled or draft
    pub status: String,
    pub scheduled_time: Option<DateTime<Utc>>,
    pub grid_position: u32,
    pub row: u32,
    pub col: u32,
}

impl FeedGridItem {
    pub fn is_scheduled(&self) -> bool {
        self.status == "scheduled"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedGrid {
    pub account_id: String,
    #[serde(default = "default_platform")]
    pub platform: String,
    pub items: Vec<FeedGridItem>,
    pub total_published: i64,
    pub total_scheduled: i64,
}

fn default_platform() -> String {
    "instagram".to_string()
}

impl FeedGrid {
    /// Items grouped into rows, in grid order
    pub fn rows(&self) -> Vec<Vec<&FeedGridItem>> {
        let mut items: Vec<&FeedGridItem> = self.items.iter().collect();
        items.sort_by_key(|item| item.grid_position);

        let mut rows: Vec<Vec<&FeedGridItem>> = Vec::new();
        for item in items {
            match rows.last_mut() {
                Some(row) if row.first().map(|first| first.row) == Some(item.row) => row.push(item),
                _ => rows.push(vec![item]),
            }
        }
        rows
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderResult {
    pub success: bool,
    pub message: String,
}

/// Clamp a requested slot count to what the planner accepts
pub fn clamp_grid_slots(limit: Option<u32>) -> u32 {
    limit.unwrap_or(DEFAULT_GRID_SLOTS).clamp(MIN_GRID_SLOTS, MAX_GRID_SLOTS)
}
