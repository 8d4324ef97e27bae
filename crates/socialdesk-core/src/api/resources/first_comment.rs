use crate::api::{path_id, ApiClient, ApiError, ApiRequest, ApiResult};
use crate::models::first_comment::{MAX_COMMENT_CHARS, MAX_COMMENT_DELAY_SECS};
use crate::models::{FirstComment, NewFirstComment};

impl ApiClient {
    pub async fn schedule_first_comment(&self, comment: &NewFirstComment) -> ApiResult<FirstComment> {
        path_id(&comment.post_platform_id)?;
        let chars = comment.comment_text.chars().count();
        if comment.comment_text.trim().is_empty() || chars > MAX_COMMENT_CHARS {
            return Err(ApiError::InvalidInput(format!(
                "Comment must be 1-{} characters",
                MAX_COMMENT_CHARS
            )));
        }
        if comment.delay_seconds > MAX_COMMENT_DELAY_SECS {
            return Err(ApiError::InvalidInput(format!(
                "Delay must be at most {} seconds",
                MAX_COMMENT_DELAY_SECS
            )));
        }
        self.fetch(ApiRequest::post("/first-comment/").json(comment)?).await
    }

    pub async fn first_comment(&self, post_platform_id: &str) -> ApiResult<FirstComment> {
        self.fetch(ApiRequest::get(format!("/first-comment/{}", path_id(post_platform_id)?)))
            .await
    }
}
