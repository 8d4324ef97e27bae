use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    #[serde(default = "default_plan")]
    pub plan: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

fn default_plan() -> String {
    "free".to_string()
}

fn default_true() -> bool {
    true
}

impl User {
    /// "Full Name <email>" for status lines
    pub fn display_name(&self) -> String {
        if self.full_name.trim().is_empty() {
            self.email.clone()
        } else {
            format!("{} <{}>", self.full_name, self.email)
        }
    }
}

/// Registration payload
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub full_name: String,
}
