use serde::{Deserialize, Serialize};

/// Minimum length the backend accepts for a new password
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Serialize, Default)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserPreferences {
    #[serde(default = "default_tone")]
    pub default_tone: String,
    #[serde(default = "default_hashtag_count")]
    pub default_hashtag_count: u32,
    #[serde(default)]
    pub default_platforms: Vec<String>,
    #[serde(default)]
    pub auto_hashtags: bool,
    #[serde(default = "default_timezone")]
    pub posting_timezone: String,
}

fn default_tone() -> String {
    "professional".to_string()
}

fn default_hashtag_count() -> u32 {
    20
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            default_tone: default_tone(),
            default_hashtag_count: default_hashtag_count(),
            default_platforms: Vec::new(),
            auto_hashtags: false,
            posting_timezone: default_timezone(),
        }
    }
}

/// Partial preferences update; unset fields are left alone
#[derive(Debug, Clone, Serialize, Default)]
pub struct PreferencesUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_hashtag_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_platforms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_hashtags: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posting_timezone: Option<String>,
}
