use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, ApiRequest, ApiResult};
use crate::models::ai::CalendarResponse;
use crate::models::{CalendarRequest, CalendarSlot, CaptionRequest, CaptionResponse, HashtagRequest, HashtagSuggestions};

#[derive(Serialize)]
struct RewriteRequest<'a> {
    caption: &'a str,
    source_platform: &'a str,
    target_platform: &'a str,
}

#[derive(Deserialize)]
struct RewriteResponse {
    rewritten_caption: String,
}

impl ApiClient {
    /// Draft one caption per requested platform
    pub async fn generate_caption(&self, request: &CaptionRequest) -> ApiResult<CaptionResponse> {
        if request.description.trim().is_empty() {
            return Err(ApiError::InvalidInput("Describe the post to caption".to_string()));
        }
        if request.platforms.is_empty() {
            return Err(ApiError::InvalidInput("Select at least one platform".to_string()));
        }
        self.fetch(ApiRequest::post("/ai/generate-caption").json(request)?).await
    }

    pub async fn generate_hashtags(&self, request: &HashtagRequest) -> ApiResult<HashtagSuggestions> {
        if request.caption.trim().is_empty() {
            return Err(ApiError::InvalidInput("Caption is required".to_string()));
        }
        self.fetch(ApiRequest::post("/ai/generate-hashtags").json(request)?).await
    }

    /// Adapt a caption written for one platform to another
    pub async fn rewrite_caption(&self, caption: &str, source_platform: &str, target_platform: &str) -> ApiResult<String> {
        if caption.trim().is_empty() {
            return Err(ApiError::InvalidInput("Caption is required".to_string()));
        }
        let body = RewriteRequest {
            caption,
            source_platform,
            target_platform,
        };
        let response: RewriteResponse = self.fetch(ApiRequest::post("/ai/rewrite").json(&body)?).await?;
        Ok(response.rewritten_caption)
    }

    pub async fn generate_calendar(&self, request: &CalendarRequest) -> ApiResult<Vec<CalendarSlot>> {
        if request.platforms.is_empty() {
            return Err(ApiError::InvalidInput("Select at least one platform".to_string()));
        }
        if request.posts_per_day == 0 {
            return Err(ApiError::InvalidInput("Posts per day must be at least 1".to_string()));
        }
        // ISO dates compare correctly as strings
        if request.end_date < request.start_date {
            return Err(ApiError::InvalidInput("End date is before start date".to_string()));
        }
        let response: CalendarResponse = self
            .fetch(ApiRequest::post("/ai/generate-calendar").json(request)?)
            .await?;
        Ok(response.slots)
    }
}
