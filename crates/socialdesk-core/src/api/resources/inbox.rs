use serde::{Deserialize, Serialize};

use crate::api::{path_id, ApiClient, ApiError, ApiRequest, ApiResult};
use crate::models::{InboxFilter, InboxList, InboxMessage, UnreadCounts};

#[derive(Serialize)]
struct MarkAllRead<'a> {
    platform: Option<&'a str>,
}

#[derive(Deserialize)]
struct MarkAllReadResponse {
    updated: u64,
}

#[derive(Serialize)]
struct Reply<'a> {
    reply_text: &'a str,
}

impl ApiClient {
    pub async fn list_inbox(&self, filter: &InboxFilter) -> ApiResult<InboxList> {
        self.fetch(ApiRequest::get("/inbox/").queries(filter.to_query())).await
    }

    pub async fn unread_counts(&self) -> ApiResult<UnreadCounts> {
        self.fetch(ApiRequest::get("/inbox/unread-counts")).await
    }

    pub async fn mark_message_read(&self, message_id: &str) -> ApiResult<InboxMessage> {
        self.fetch(ApiRequest::patch(format!("/inbox/{}/read", path_id(message_id)?))).await
    }

    /// Mark everything (or one platform) read; returns the number updated
    pub async fn mark_all_read(&self, platform: Option<&str>) -> ApiResult<u64> {
        let request = ApiRequest::post("/inbox/mark-all-read").json(&MarkAllRead { platform })?;
        let response: MarkAllReadResponse = self.fetch(request).await?;
        Ok(response.updated)
    }

    pub async fn reply_to_message(&self, message_id: &str, reply_text: &str) -> ApiResult<InboxMessage> {
        let reply_text = reply_text.trim();
        if reply_text.is_empty() {
            return Err(ApiError::InvalidInput("Reply cannot be empty".to_string()));
        }
        let request = ApiRequest::post(format!("/inbox/{}/reply", path_id(message_id)?)).json(&Reply { reply_text })?;
        self.fetch(request).await
    }
}
