//! Local caching module for offline data access.
//!
//! `CacheManager` keeps the last fetched profile, connected accounts and
//! first page of posts as JSON files. Data is considered stale after 60
//! minutes. The session wipes the cache whenever it ends.

pub mod manager;

pub use manager::{CacheManager, CachedData};
