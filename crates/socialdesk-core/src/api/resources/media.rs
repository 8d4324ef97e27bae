use crate::api::{path_id, ApiClient, ApiError, ApiRequest, ApiResult};
use crate::models::post::clamp_limit;
use crate::models::{MediaAsset, MediaList};

impl ApiClient {
    pub async fn list_media(
        &self,
        media_type: Option<&str>,
        skip: u32,
        limit: Option<u32>,
    ) -> ApiResult<MediaList> {
        let mut request = ApiRequest::get("/media/");
        if let Some(media_type) = media_type {
            request = request.query("media_type", media_type);
        }
        let request = request.query("skip", skip).query("limit", clamp_limit(limit));
        self.fetch(request).await
    }

    pub async fn get_media(&self, media_id: &str) -> ApiResult<MediaAsset> {
        self.fetch(ApiRequest::get(format!("/media/{}", path_id(media_id)?))).await
    }

    pub async fn upload_media(
        &self,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<MediaAsset> {
        if bytes.is_empty() {
            return Err(ApiError::InvalidInput(format!("{} is empty", file_name)));
        }
        let request = ApiRequest::post("/media/upload").file("file", file_name, mime_type, bytes);
        self.fetch(request).await
    }

    pub async fn delete_media(&self, media_id: &str) -> ApiResult<()> {
        self.execute(ApiRequest::delete(format!("/media/{}", path_id(media_id)?))).await
    }
}
