use serde::{Deserialize, Serialize};

/// Largest CSV the upload endpoint accepts
pub const MAX_CSV_BYTES: usize = 5 * 1024 * 1024;

/// A validated CSV row, sent back to confirm creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkEntry {
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
    pub platforms: Vec<String>,
    /// ISO-8601 timestamp
    pub schedule_time: String,
    #[serde(default = "default_post_type")]
    pub post_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_urls: Option<Vec<String>>,
}

fn default_post_type() -> String {
    "feed".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkPreviewEntry {
    pub row_number: u32,
    /// First 50 characters of the caption
    pub caption: String,
    #[serde(default)]
    pub platforms: Vec<String>,
    pub schedule_time: String,
    pub is_valid: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkPreview {
    pub total_rows: u32,
    pub valid_count: u32,
    pub error_count: u32,
    pub entries: Vec<BulkPreviewEntry>,
}

impl BulkPreview {
    pub fn invalid_rows(&self) -> Vec<&BulkPreviewEntry> {
        self.entries.iter().filter(|e| !e.is_valid).collect()
    }

    pub fn is_clean(&self) -> bool {
        self.error_count == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkResult {
    pub created: u32,
    pub failed: u32,
    #[serde(default)]
    pub errors: Vec<String>,
}
