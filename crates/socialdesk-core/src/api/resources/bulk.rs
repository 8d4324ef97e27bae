use serde::Serialize;

use crate::api::{ApiClient, ApiError, ApiRequest, ApiResult};
use crate::models::bulk::MAX_CSV_BYTES;
use crate::models::{BulkEntry, BulkPreview, BulkResult};

#[derive(Serialize)]
struct ConfirmRequest<'a> {
    entries: &'a [BulkEntry],
}

impl ApiClient {
    /// Upload a scheduling CSV and get the per-row validation preview
    pub async fn bulk_upload_csv(&self, file_name: &str, bytes: Vec<u8>) -> ApiResult<BulkPreview> {
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Err(ApiError::InvalidInput("Uploaded file is empty".to_string()));
        }
        if bytes.len() > MAX_CSV_BYTES {
            return Err(ApiError::InvalidInput("File size exceeds the 5 MB limit".to_string()));
        }
        let request = ApiRequest::post("/bulk/upload").file("file", file_name, "text/csv", bytes);
        self.fetch(request).await
    }

    /// Create posts from the rows kept after previewing
    pub async fn bulk_confirm(&self, entries: &[BulkEntry]) -> ApiResult<BulkResult> {
        if entries.is_empty() {
            return Err(ApiError::InvalidInput("No entries provided".to_string()));
        }
        self.fetch(ApiRequest::post("/bulk/confirm").json(&ConfirmRequest { entries })?)
            .await
    }

    /// CSV template with the expected header row
    pub async fn bulk_template(&self) -> ApiResult<String> {
        self.fetch_text(ApiRequest::get("/bulk/template")).await
    }
}
