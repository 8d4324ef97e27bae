//! Core library for socialdesk.
//!
//! Provides the authenticated API client for the social media manager
//! backend, the session/credential store it reads tokens from, typed
//! resource models, a local JSON cache and a toast notification queue.
//!
//! Every resource call goes through [`api::ApiClient::dispatch`], which
//! attaches the stored access token and renews it once on a 401.

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod models;
pub mod notify;
pub mod utils;

pub use api::{ApiClient, ApiError, ApiRequest};
pub use auth::{Credentials, Navigator, Session, SessionState};
pub use config::Config;
