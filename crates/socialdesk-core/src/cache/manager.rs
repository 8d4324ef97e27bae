use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::models::{PostList, SocialAccount, User};

/// Consider cache stale after 1 hour.
const CACHE_STALE_MINUTES: i64 = 60;

const PROFILE: &str = "profile";
const ACCOUNTS: &str = "accounts";
const POSTS: &str = "posts";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedData<T> {
    pub data: T,
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedData<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    pub fn age_minutes(&self) -> i64 {
        (Utc::now() - self.cached_at).num_minutes()
    }

    pub fn age_display(&self) -> String {
        let minutes = self.age_minutes();
        if minutes < 1 {
            // Covers clock skew too
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 1440 {
            let hours = minutes / 60;
            if minutes % 60 >= 30 {
                format!("{}h ago", hours + 1)
            } else {
                format!("{}h ago", hours)
            }
        } else {
            let days = minutes / 1440;
            if (minutes % 1440) / 60 >= 12 {
                format!("{}d ago", days + 1)
            } else {
                format!("{}d ago", days)
            }
        }
    }

    pub fn is_stale(&self) -> bool {
        self.age_minutes() > CACHE_STALE_MINUTES
    }
}

pub struct CacheManager {
    cache_dir: PathBuf,
}

impl CacheManager {
    pub fn new(cache_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&cache_dir)
            .with_context(|| format!("Failed to create cache dir {}", cache_dir.display()))?;
        Ok(Self { cache_dir })
    }

    pub fn dir(&self) -> &Path {
        &self.cache_dir
    }

    fn cache_path(&self, name: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", name))
    }

    fn load<T: DeserializeOwned>(&self, name: &str) -> Result<Option<CachedData<T>>> {
        let path = self.cache_path(name);
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read cache file: {}", name))?;

        let cached: CachedData<T> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse cache file: {}", name))?;

        Ok(Some(cached))
    }

    fn save<T: Serialize>(&self, name: &str, data: &T) -> Result<()> {
        let cached = CachedData::new(data);
        let contents = serde_json::to_string_pretty(&cached)?;
        std::fs::write(self.cache_path(name), contents)
            .with_context(|| format!("Failed to write cache file: {}", name))?;
        Ok(())
    }

    // ===== Profile =====

    pub fn load_profile(&self) -> Result<Option<CachedData<User>>> {
        self.load(PROFILE)
    }

    pub fn save_profile(&self, user: &User) -> Result<()> {
        self.save(PROFILE, user)
    }

    // ===== Accounts =====

    pub fn load_accounts(&self) -> Result<Option<CachedData<Vec<SocialAccount>>>> {
        self.load(ACCOUNTS)
    }

    pub fn save_accounts(&self, accounts: &[SocialAccount]) -> Result<()> {
        self.save(ACCOUNTS, &accounts)
    }

    // ===== Posts =====

    pub fn load_posts(&self) -> Result<Option<CachedData<PostList>>> {
        self.load(POSTS)
    }

    pub fn save_posts(&self, posts: &PostList) -> Result<()> {
        self.save(POSTS, posts)
    }

    /// Whether the profile is missing or older than the staleness window
    pub fn profile_stale(&self) -> bool {
        match self.load_profile() {
            Ok(Some(cached)) => cached.is_stale(),
            Ok(None) => true,
            Err(e) => {
                debug!(error = %e, "Failed to load cached profile");
                true
            }
        }
    }

    /// Remove every cache file. Token files kept in the same directory are
    /// left alone.
    pub fn clear(&self) -> Result<()> {
        for name in [PROFILE, ACCOUNTS, POSTS] {
            let path = self.cache_path(name);
            if path.exists() {
                std::fs::remove_file(&path)
                    .with_context(|| format!("Failed to remove cache file: {}", name))?;
            }
        }
        debug!(dir = %self.cache_dir.display(), "Cache cleared");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
