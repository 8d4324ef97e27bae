use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Most post ideas the backend will generate per request
pub const MAX_POST_IDEAS: u32 = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyQuestionnaire {
    pub business_type: String,
    pub target_audience: String,
    pub goals: Vec<String>,
    pub platforms: Vec<String>,
    pub tone: String,
    pub posting_frequency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_pillars: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPillar {
    pub name: String,
    pub description: String,
    /// Share of total content, 0-100
    pub percentage: f64,
    #[serde(default)]
    pub sample_topics: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySlot {
    pub day_of_week: String,
    pub time: String,
    pub pillar: String,
    pub post_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strategy {
    pub pillars: Vec<ContentPillar>,
    pub weekly_schedule: Vec<WeeklySlot>,
    /// Free-form idea objects; shape varies with the model output
    #[serde(default)]
    pub post_ideas: Vec<serde_json::Value>,
    #[serde(default)]
    pub hashtag_strategy: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub growth_tactics: Vec<String>,
}

impl Strategy {
    /// Pillar shares should add up to 100; allow a point of rounding slack
    pub fn pillars_balanced(&self) -> bool {
        let total: f64 = self.pillars.iter().map(|p| p.percentage).sum();
        (total - 100.0).abs() <= 1.0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostIdeasRequest {
    pub strategy_context: String,
    pub count: u32,
    pub platform: String,
}

impl PostIdeasRequest {
    pub fn new(strategy_context: impl Into<String>, platform: impl Into<String>, count: u32) -> Self {
        Self {
            strategy_context: strategy_context.into(),
            count: count.clamp(1, MAX_POST_IDEAS),
            platform: platform.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostIdea {
    pub caption: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    pub post_type: String,
    pub platform: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceAnalysis {
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub top_performing_types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PostIdeasResponse {
    pub ideas: Vec<PostIdea>,
}
