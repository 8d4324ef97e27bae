//! REST API client module for the social media manager backend.
//!
//! `ApiClient::dispatch` is the single request path: it attaches the
//! stored access token as a bearer header and, on the first 401 for a
//! request, renews the token pair once through `POST /auth/refresh`
//! before re-sending. Resource wrappers in `resources` are thin typed
//! layers over it.

pub mod client;
pub mod error;
pub mod request;
pub mod resources;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use request::{path_id, ApiRequest, FilePart, Payload};
