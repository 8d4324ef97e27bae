use crate::api::{path_id, ApiClient, ApiError, ApiRequest, ApiResult};
use crate::models::{NewPost, Post, PostFilter, PostList};

impl ApiClient {
    pub async fn list_posts(&self, filter: &PostFilter) -> ApiResult<PostList> {
        self.fetch(ApiRequest::get("/posts/").queries(filter.to_query())).await
    }

    pub async fn get_post(&self, post_id: &str) -> ApiResult<Post> {
        self.fetch(ApiRequest::get(format!("/posts/{}", path_id(post_id)?))).await
    }

    /// Publish now, schedule, or save as draft depending on `post`
    pub async fn create_post(&self, post: &NewPost) -> ApiResult<Post> {
        if post.caption.trim().is_empty() {
            return Err(ApiError::InvalidInput("Caption is required".to_string()));
        }
        if post.account_ids.is_empty() {
            return Err(ApiError::InvalidInput("Select at least one account".to_string()));
        }
        self.fetch(ApiRequest::post("/posts/").json(post)?).await
    }

    pub async fn delete_post(&self, post_id: &str) -> ApiResult<()> {
        self.execute(ApiRequest::delete(format!("/posts/{}", path_id(post_id)?))).await
    }
}
