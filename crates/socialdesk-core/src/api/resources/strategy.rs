use serde::Serialize;

use crate::api::{ApiClient, ApiError, ApiRequest, ApiResult};
use crate::models::strategy::PostIdeasResponse;
use crate::models::{PerformanceAnalysis, PostIdea, PostIdeasRequest, Strategy, StrategyQuestionnaire};

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    post_data: &'a [serde_json::Value],
}

impl ApiClient {
    /// Build a content strategy from a questionnaire
    pub async fn generate_strategy(&self, questionnaire: &StrategyQuestionnaire) -> ApiResult<Strategy> {
        if questionnaire.platforms.is_empty() || questionnaire.goals.is_empty() {
            return Err(ApiError::InvalidInput("At least one goal and one platform are required".to_string()));
        }
        self.fetch(ApiRequest::post("/strategy/generate").json(questionnaire)?).await
    }

    pub async fn post_ideas(&self, request: &PostIdeasRequest) -> ApiResult<Vec<PostIdea>> {
        let response: PostIdeasResponse = self
            .fetch(ApiRequest::post("/strategy/post-ideas").json(request)?)
            .await?;
        Ok(response.ideas)
    }

    pub async fn analyze_performance(&self, post_data: &[serde_json::Value]) -> ApiResult<PerformanceAnalysis> {
        if post_data.is_empty() {
            return Err(ApiError::InvalidInput("No post data to analyze".to_string()));
        }
        self.fetch(ApiRequest::post("/strategy/analyze").json(&AnalyzeRequest { post_data })?)
            .await
    }
}
