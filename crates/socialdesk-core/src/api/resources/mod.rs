//! Typed wrappers for each backend resource.
//!
//! Every file here is an `impl ApiClient` block; all authenticated calls
//! go through `ApiClient::dispatch`.

mod accounts;
mod ai;
mod analytics;
mod auth;
mod best_time;
mod bio;
mod bulk;
mod categories;
mod feed_planner;
mod first_comment;
mod inbox;
mod media;
mod posts;
mod settings;
mod strategy;
