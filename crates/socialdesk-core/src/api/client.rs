//! API client for the social media manager REST backend.
//!
//! `ApiClient` is the authenticated request gateway. UI code never touches
//! bearer headers or token renewal; it hands an `ApiRequest` to one of the
//! resource wrappers and gets a typed result or an `ApiError` back.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{multipart, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::request::{ApiRequest, Payload};
use super::{ApiError, ApiResult};
use crate::auth::session::EndedRenewal;
use crate::auth::{Session, TokenPair};

// ============================================================================
// Constants
// ============================================================================

/// Default API root when none is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Token renewal endpoint, relative to the API root
pub const REFRESH_PATH: &str = "/auth/refresh";

/// HTTP request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

/// Clone is cheap - reqwest::Client and the session are both shared.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    /// Create a client for `base_url` with the default request timeout
    pub fn new(base_url: &str, session: Arc<Session>) -> ApiResult<Self> {
        Self::with_timeout(base_url, session, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: &str, session: Arc<Session>, timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn build(&self, request: &ApiRequest, token: Option<&str>) -> ApiResult<RequestBuilder> {
        let mut builder = self
            .client
            .request(request.method.clone(), self.url(&request.path));

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        builder = match &request.body {
            Payload::Empty => builder,
            Payload::Json(value) => builder.json(value),
            Payload::Multipart(parts) => {
                let mut form = multipart::Form::new();
                for part in parts {
                    let file = multipart::Part::bytes(part.bytes.clone())
                        .file_name(part.file_name.clone())
                        .mime_str(&part.mime_type)
                        .map_err(|e| {
                            ApiError::InvalidInput(format!("Invalid mime type {}: {}", part.mime_type, e))
                        })?;
                    form = form.part(part.field.clone(), file);
                }
                builder.multipart(form)
            }
        };

        Ok(builder)
    }

    async fn send(&self, request: &ApiRequest, token: Option<&str>) -> ApiResult<Response> {
        let response = self.build(request, token)?.send().await?;
        debug!(
            method = %request.method,
            path = %request.path,
            status = response.status().as_u16(),
            retried = request.retried,
            "API response"
        );
        Ok(response)
    }

    // ===== Gateway =====

    /// Send a request with the stored access token attached.
    ///
    /// Any response other than 401 is returned as-is. The first 401 for a
    /// request triggers one renewal and one re-send; a 401 on the re-sent
    /// request is returned as `ApiError::Unauthorized`. Transport errors
    /// are never retried.
    pub async fn dispatch(&self, mut request: ApiRequest) -> ApiResult<Response> {
        let mut token = self.session.credentials().access_token()?;

        loop {
            let response = self.send(&request, token.as_deref()).await?;
            if response.status() != StatusCode::UNAUTHORIZED {
                return Ok(response);
            }

            if request.retried {
                warn!(path = %request.path, "Still unauthorized after token renewal");
                return Err(ApiError::Unauthorized);
            }

            request.retried = true;
            token = Some(self.renew_access_token(token.as_deref()).await?);
        }
    }

    /// Obtain a fresh access token after `stale` was rejected.
    ///
    /// Renewals are single-flight: callers queue on the session's renewal
    /// slot. A caller that finds a different access token already stored
    /// uses it instead of spending the refresh token again, and a caller
    /// whose token was dropped by a failed renewal gets that same failure
    /// without a second teardown.
    async fn renew_access_token(&self, stale: Option<&str>) -> ApiResult<String> {
        let mut slot = self.session.renewal_slot().await;
        let credentials = self.session.credentials();

        match credentials.access_token()? {
            Some(current) if stale != Some(current.as_str()) => {
                debug!("Access token already renewed by a concurrent request");
                return Ok(current);
            }
            Some(_) => {}
            None => {
                if let Some(ended) = slot.as_ref().filter(|e| Some(e.stale.as_str()) == stale) {
                    debug!("Session already ended by a concurrent renewal");
                    return Err(ended.to_error());
                }
            }
        }

        let Some(refresh_token) = credentials.refresh_token()? else {
            info!("No refresh token available, ending session");
            self.session.teardown();
            *slot = stale.map(|s| EndedRenewal {
                stale: s.to_string(),
                error: None,
            });
            return Err(ApiError::Unauthorized);
        };

        match self.request_renewal(&refresh_token).await {
            Ok(pair) => {
                credentials.store_pair(&pair)?;
                *slot = None;
                info!("Access token renewed");
                Ok(pair.access_token)
            }
            Err(e) => {
                warn!(error = %e, "Token renewal failed, ending session");
                self.session.teardown();
                let error = Arc::new(e);
                *slot = stale.map(|s| EndedRenewal {
                    stale: s.to_string(),
                    error: Some(error.clone()),
                });
                Err(ApiError::RenewalFailed(error))
            }
        }
    }

    /// Exchange a refresh token for a new pair. Bypasses `dispatch`.
    async fn request_renewal(&self, refresh_token: &str) -> ApiResult<TokenPair> {
        let response = self
            .client
            .post(self.url(REFRESH_PATH))
            .json(&RefreshRequest { refresh_token })
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        Self::parse_json(response, REFRESH_PATH).await
    }

    /// Send without a bearer token and without the renewal path.
    ///
    /// Used for login, registration and public pages, where a 401 means
    /// bad input rather than an expired session.
    pub async fn send_unauthenticated(&self, request: ApiRequest) -> ApiResult<Response> {
        self.send(&request, None).await
    }

    // ===== Response handling =====

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: Response) -> ApiResult<Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    async fn parse_json<T: DeserializeOwned>(response: Response, path: &str) -> ApiResult<T> {
        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", path, e)))
    }

    /// Dispatch and decode a JSON body
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let path = request.path.clone();
        let response = Self::check_response(self.dispatch(request).await?).await?;
        Self::parse_json(response, &path).await
    }

    /// Like `fetch`, but without the gateway
    pub(crate) async fn fetch_public<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let path = request.path.clone();
        let response = Self::check_response(self.send_unauthenticated(request).await?).await?;
        Self::parse_json(response, &path).await
    }

    /// Dispatch a request whose success response has no useful body
    pub(crate) async fn execute(&self, request: ApiRequest) -> ApiResult<()> {
        Self::check_response(self.dispatch(request).await?).await?;
        Ok(())
    }

    pub(crate) async fn execute_public(&self, request: ApiRequest) -> ApiResult<()> {
        Self::check_response(self.send_unauthenticated(request).await?).await?;
        Ok(())
    }

    pub(crate) async fn fetch_text(&self, request: ApiRequest) -> ApiResult<String> {
        let response = Self::check_response(self.dispatch(request).await?).await?;
        Ok(response.text().await?)
    }
}
