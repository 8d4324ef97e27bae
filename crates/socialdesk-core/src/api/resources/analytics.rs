use crate::api::{path_id, ApiClient, ApiRequest, ApiResult};
use crate::models::analytics::MAX_DASHBOARD_DAYS;
use crate::models::AnalyticsDashboard;

impl ApiClient {
    /// Dashboard for the last `days` days (clamped to 1..=365)
    pub async fn analytics_dashboard(&self, days: u32) -> ApiResult<AnalyticsDashboard> {
        let days = days.clamp(1, MAX_DASHBOARD_DAYS);
        self.fetch(ApiRequest::get("/analytics/dashboard").query("days", days)).await
    }

    /// Pull fresh metrics for one account from its platform
    pub async fn refresh_account_metrics(&self, account_id: &str) -> ApiResult<serde_json::Value> {
        self.fetch(ApiRequest::post(format!("/analytics/refresh/{}", path_id(account_id)?))).await
    }
}
