use serde::Serialize;

use crate::api::{path_id, ApiClient, ApiError, ApiRequest, ApiResult};
use crate::models::bio::is_valid_slug;
use crate::models::{
    BioLink, BioLinkUpdate, BioPage, BioPageUpdate, ClickAnalytics, NewBioLink, NewBioPage, PublicBioPage,
};

#[derive(Serialize)]
struct ReorderLinks<'a> {
    link_ids: &'a [String],
}

fn check_slug(slug: &str) -> ApiResult<()> {
    if is_valid_slug(slug) {
        Ok(())
    } else {
        Err(ApiError::InvalidInput(format!(
            "Invalid slug '{}': use 1-100 letters, digits, '-' or '_'",
            slug
        )))
    }
}

impl ApiClient {
    pub async fn list_bio_pages(&self) -> ApiResult<Vec<BioPage>> {
        self.fetch(ApiRequest::get("/bio/bio-pages")).await
    }

    pub async fn get_bio_page(&self, page_id: &str) -> ApiResult<BioPage> {
        self.fetch(ApiRequest::get(format!("/bio/bio-pages/{}", path_id(page_id)?))).await
    }

    pub async fn create_bio_page(&self, page: &NewBioPage) -> ApiResult<BioPage> {
        check_slug(&page.slug)?;
        self.fetch(ApiRequest::post("/bio/bio-pages").json(page)?).await
    }

    pub async fn update_bio_page(&self, page_id: &str, update: &BioPageUpdate) -> ApiResult<BioPage> {
        if let Some(ref slug) = update.slug {
            check_slug(slug)?;
        }
        self.fetch(ApiRequest::put(format!("/bio/bio-pages/{}", path_id(page_id)?)).json(update)?)
            .await
    }

    pub async fn delete_bio_page(&self, page_id: &str) -> ApiResult<()> {
        self.execute(ApiRequest::delete(format!("/bio/bio-pages/{}", path_id(page_id)?))).await
    }

    pub async fn add_bio_link(&self, page_id: &str, link: &NewBioLink) -> ApiResult<BioLink> {
        self.fetch(ApiRequest::post(format!("/bio/bio-pages/{}/links", path_id(page_id)?)).json(link)?)
            .await
    }

    pub async fn update_bio_link(
        &self,
        page_id: &str,
        link_id: &str,
        update: &BioLinkUpdate,
    ) -> ApiResult<BioLink> {
        let path = format!("/bio/bio-pages/{}/links/{}", path_id(page_id)?, path_id(link_id)?);
        self.fetch(ApiRequest::put(path).json(update)?).await
    }

    pub async fn delete_bio_link(&self, page_id: &str, link_id: &str) -> ApiResult<()> {
        let path = format!("/bio/bio-pages/{}/links/{}", path_id(page_id)?, path_id(link_id)?);
        self.execute(ApiRequest::delete(path)).await
    }

    /// Set link order; `link_ids` lists every link of the page in its new order
    pub async fn reorder_bio_links(&self, page_id: &str, link_ids: &[String]) -> ApiResult<Vec<BioLink>> {
        let request = ApiRequest::put(format!("/bio/bio-pages/{}/links/reorder", path_id(page_id)?))
            .json(&ReorderLinks { link_ids })?;
        self.fetch(request).await
    }

    pub async fn bio_page_analytics(&self, page_id: &str) -> ApiResult<Vec<ClickAnalytics>> {
        self.fetch(ApiRequest::get(format!("/bio/bio-pages/{}/analytics", path_id(page_id)?))).await
    }

    /// Published page as visitors see it. No session needed.
    pub async fn public_bio_page(&self, slug: &str) -> ApiResult<PublicBioPage> {
        check_slug(slug)?;
        self.fetch_public(ApiRequest::get(format!("/bio/p/{}", slug))).await
    }

    /// Count a visitor click on a published link
    pub async fn record_bio_click(&self, slug: &str, link_id: &str) -> ApiResult<()> {
        check_slug(slug)?;
        self.execute_public(ApiRequest::post(format!("/bio/p/{}/click/{}", slug, path_id(link_id)?)))
            .await
    }
}
