use serde::{Deserialize, Serialize};

const DAY_NAMES: [&str; 7] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

/// Name for a Monday-based day index
pub fn day_name(day_of_week: u8) -> &'static str {
    DAY_NAMES.get(day_of_week as usize).copied().unwrap_or("Unknown")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestTimeSlot {
    /// 0 is Monday
    pub day_of_week: u8,
    pub hour_utc: u8,
    pub avg_engagement_rate: f64,
    pub avg_impressions: f64,
    pub sample_count: i64,
    #[serde(default)]
    pub day_name: Option<String>,
}

impl BestTimeSlot {
    pub fn label(&self) -> String {
        let day = self.day_name.as_deref().unwrap_or_else(|| day_name(self.day_of_week));
        format!("{} {:02}:00 UTC", day, self.hour_utc)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestTimes {
    pub account_id: String,
    pub platform: String,
    pub best_times: Vec<BestTimeSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub day_of_week: u8,
    pub hour_utc: u8,
    /// Engagement rate
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heatmap {
    pub account_id: String,
    pub platform: String,
    pub data: Vec<HeatmapCell>,
}

impl Heatmap {
    pub fn peak(&self) -> Option<&HeatmapCell> {
        self.data
            .iter()
            .max_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(std::cmp::Ordering::Equal))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementAnalysis {
    pub account_id: String,
    pub platform: String,
    pub slots_updated: i64,
    pub message: String,
}
