use crate::api::{path_id, ApiClient, ApiRequest, ApiResult};
use crate::models::{BestTimes, EngagementAnalysis, Heatmap};

impl ApiClient {
    pub async fn best_times(&self, account_id: &str) -> ApiResult<BestTimes> {
        self.fetch(ApiRequest::get(format!("/best-times/{}", path_id(account_id)?)))
            .await
    }

    pub async fn engagement_heatmap(&self, account_id: &str) -> ApiResult<Heatmap> {
        self.fetch(ApiRequest::get(format!("/best-times/{}/heatmap", path_id(account_id)?)))
            .await
    }

    /// Recompute posting-time slots from the account's engagement history
    pub async fn analyze_engagement(&self, account_id: &str) -> ApiResult<EngagementAnalysis> {
        self.fetch(ApiRequest::post(format!("/best-times/{}/analyze", path_id(account_id)?)))
            .await
    }
}
