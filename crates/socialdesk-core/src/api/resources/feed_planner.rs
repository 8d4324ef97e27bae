use serde::Serialize;

use crate::api::{path_id, ApiClient, ApiError, ApiRequest, ApiResult};
use crate::models::feed::clamp_grid_slots;
use crate::models::{FeedGrid, ReorderResult};

#[derive(Serialize)]
struct ReorderRequest<'a> {
    post_ids: &'a [String],
}

impl ApiClient {
    /// Grid preview of published and scheduled posts for an account
    pub async fn feed_preview(&self, account_id: &str, limit: Option<u32>) -> ApiResult<FeedGrid> {
        let request = ApiRequest::get(format!("/feed-planner/{}", path_id(account_id)?))
            .query("limit", clamp_grid_slots(limit));
        self.fetch(request).await
    }

    /// Re-slot scheduled posts in the given display order
    pub async fn reorder_feed(&self, account_id: &str, post_ids: &[String]) -> ApiResult<ReorderResult> {
        if post_ids.is_empty() {
            return Err(ApiError::InvalidInput("No posts to reorder".to_string()));
        }
        let path = format!("/feed-planner/{}/reorder", path_id(account_id)?);
        self.fetch(ApiRequest::put(path).json(&ReorderRequest { post_ids })?).await
    }
}
