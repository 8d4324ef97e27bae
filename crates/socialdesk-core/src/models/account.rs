use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialAccount {
    pub id: String,
    pub platform: String,
    pub platform_username: String,
    pub account_type: String,
    pub is_active: bool,
    pub connected_at: DateTime<Utc>,
}

impl SocialAccount {
    pub fn handle(&self) -> String {
        format!("@{}", self.platform_username)
    }

    pub fn status_display(&self) -> &'static str {
        if self.is_active {
            "active"
        } else {
            "disconnected"
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthStart {
    pub authorization_url: String,
}

/// Platforms an account can be connected through.
///
/// Meta covers both Facebook pages and Instagram business accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Twitter,
    Meta,
    TikTok,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Meta => "meta",
            Platform::TikTok => "tiktok",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "twitter" | "x" => Ok(Platform::Twitter),
            "meta" | "facebook" | "instagram" => Ok(Platform::Meta),
            "tiktok" => Ok(Platform::TikTok),
            other => Err(format!("Unsupported platform: {}", other)),
        }
    }
}
