use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::{path_id, ApiClient, ApiError, ApiRequest, ApiResult};
use crate::models::category::Items;
use crate::models::post::clamp_limit;
use crate::models::{Category, CategoryUpdate, NewCategory, PostList, RecyclablePost, RecycleQueueItem};

#[derive(Serialize)]
struct RecycleQueueAdd<'a> {
    post_id: &'a str,
    category_id: &'a str,
    scheduled_for: DateTime<Utc>,
}

impl ApiClient {
    pub async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        let items: Items<Category> = self.fetch(ApiRequest::get("/content/categories")).await?;
        Ok(items.items)
    }

    pub async fn create_category(&self, category: &NewCategory) -> ApiResult<Category> {
        if category.name.trim().is_empty() {
            return Err(ApiError::InvalidInput("Category name is required".to_string()));
        }
        if category.recycle_interval_days < 1 {
            return Err(ApiError::InvalidInput("Recycle interval must be at least 1 day".to_string()));
        }
        self.fetch(ApiRequest::post("/content/categories").json(category)?).await
    }

    pub async fn update_category(&self, category_id: &str, update: &CategoryUpdate) -> ApiResult<Category> {
        self.fetch(ApiRequest::put(format!("/content/categories/{}", path_id(category_id)?)).json(update)?)
            .await
    }

    pub async fn delete_category(&self, category_id: &str) -> ApiResult<()> {
        self.execute(ApiRequest::delete(format!("/content/categories/{}", path_id(category_id)?)))
            .await
    }

    pub async fn assign_post(&self, category_id: &str, post_id: &str) -> ApiResult<()> {
        self.execute(ApiRequest::post(format!(
            "/content/categories/{}/posts/{}",
            path_id(category_id)?, path_id(post_id)?
        )))
        .await
    }

    pub async fn unassign_post(&self, category_id: &str, post_id: &str) -> ApiResult<()> {
        self.execute(ApiRequest::delete(format!(
            "/content/categories/{}/posts/{}",
            path_id(category_id)?, path_id(post_id)?
        )))
        .await
    }

    pub async fn category_posts(&self, category_id: &str, skip: u32, limit: Option<u32>) -> ApiResult<PostList> {
        let request = ApiRequest::get(format!("/content/categories/{}/posts", path_id(category_id)?))
            .query("skip", skip)
            .query("limit", clamp_limit(limit));
        self.fetch(request).await
    }

    /// Posts in recyclable categories that are due to go out again
    pub async fn recyclable_posts(&self) -> ApiResult<Vec<RecyclablePost>> {
        let items: Items<RecyclablePost> = self.fetch(ApiRequest::get("/content/categories/recyclable")).await?;
        Ok(items.items)
    }

    pub async fn recycle_queue(&self) -> ApiResult<Vec<RecycleQueueItem>> {
        let items: Items<RecycleQueueItem> =
            self.fetch(ApiRequest::get("/content/categories/recycle-queue")).await?;
        Ok(items.items)
    }

    pub async fn enqueue_recycle(
        &self,
        post_id: &str,
        category_id: &str,
        scheduled_for: DateTime<Utc>,
    ) -> ApiResult<RecycleQueueItem> {
        let body = RecycleQueueAdd {
            post_id,
            category_id,
            scheduled_for,
        };
        self.fetch(ApiRequest::post("/content/categories/recycle-queue").json(&body)?)
            .await
    }
}
