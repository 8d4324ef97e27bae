use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest window the dashboard endpoint accepts
pub const MAX_DASHBOARD_DAYS: u32 = 365;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalyticsOverview {
    pub total_posts: i64,
    pub total_published: i64,
    pub total_impressions: i64,
    pub total_reach: i64,
    pub total_likes: i64,
    pub total_comments: i64,
    pub total_shares: i64,
    pub avg_engagement_rate: f64,
    pub total_followers: i64,
}

impl AnalyticsOverview {
    pub fn engagement_display(&self) -> String {
        format!("{:.2}%", self.avg_engagement_rate)
    }

    /// Likes + comments + shares
    pub fn total_interactions(&self) -> i64 {
        self.total_likes + self.total_comments + self.total_shares
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformBreakdown {
    pub platform: String,
    pub platform_username: String,
    pub account_id: String,
    #[serde(default)]
    pub posts_count: i64,
    #[serde(default)]
    pub impressions: i64,
    #[serde(default)]
    pub reach: i64,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub comments: i64,
    #[serde(default)]
    pub shares: i64,
    #[serde(default)]
    pub followers: i64,
    #[serde(default)]
    pub engagement_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPerformance {
    pub post_id: String,
    pub caption: String,
    pub platform: String,
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub impressions: i64,
    #[serde(default)]
    pub reach: i64,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub comments: i64,
    #[serde(default)]
    pub shares: i64,
    #[serde(default)]
    pub engagement_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMetric {
    pub date: String,
    #[serde(default)]
    pub impressions: i64,
    #[serde(default)]
    pub reach: i64,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub comments: i64,
    #[serde(default)]
    pub engagement_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnalyticsDashboard {
    pub overview: AnalyticsOverview,
    #[serde(default)]
    pub platform_breakdown: Vec<PlatformBreakdown>,
    #[serde(default)]
    pub top_posts: Vec<PostPerformance>,
    #[serde(default)]
    pub daily_metrics: Vec<DailyMetric>,
}

impl AnalyticsDashboard {
    /// Platform with the highest engagement rate
    pub fn best_platform(&self) -> Option<&PlatformBreakdown> {
        self.platform_breakdown
            .iter()
            .max_by(|a, b| a.engagement_rate.total_cmp(&b.engagement_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_parses_with_defaults() {
        let json = r#"{
            "overview": {"total_posts": 4, "total_likes": 10, "total_comments": 3, "total_shares": 2, "avg_engagement_rate": 3.456},
            "platform_breakdown": [
                {"platform": "twitter", "platform_username": "acme", "account_id": "a1", "engagement_rate": 1.5},
                {"platform": "instagram", "platform_username": "acme", "account_id": "a2", "engagement_rate": 4.2}
            ],
            "top_posts": [],
            "daily_metrics": [{"date": "2025-03-01", "impressions": 120}]
        }"#;
        let dashboard: AnalyticsDashboard = serde_json::from_str(json).unwrap();
        assert_eq!(dashboard.overview.total_reach, 0);
        assert_eq!(dashboard.overview.total_interactions(), 15);
        assert_eq!(dashboard.overview.engagement_display(), "3.46%");
        assert_eq!(dashboard.best_platform().map(|p| p.account_id.as_str()), Some("a2"));
        assert_eq!(dashboard.daily_metrics[0].reach, 0);
    }
}
