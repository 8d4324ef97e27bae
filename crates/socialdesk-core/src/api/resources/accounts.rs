use crate::api::{path_id, ApiClient, ApiRequest, ApiResult};
use crate::models::{OAuthStart, Platform, SocialAccount};

impl ApiClient {
    /// Connected accounts, most recently connected first
    pub async fn list_accounts(&self) -> ApiResult<Vec<SocialAccount>> {
        self.fetch(ApiRequest::get("/accounts/")).await
    }

    /// Start the OAuth flow; the returned URL is opened in a browser
    pub async fn connect_account(&self, platform: Platform) -> ApiResult<OAuthStart> {
        self.fetch(ApiRequest::get(format!("/accounts/{}/connect", platform))).await
    }

    pub async fn disconnect_account(&self, account_id: &str) -> ApiResult<()> {
        self.execute(ApiRequest::delete(format!("/accounts/{}", path_id(account_id)?))).await
    }
}
