use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::api::{ApiClient, ApiError, ApiRequest, ApiResult};
use crate::models::settings::MIN_PASSWORD_LEN;
use crate::models::{PreferencesUpdate, ProfileUpdate, User, UserPreferences};

#[derive(Serialize)]
struct PasswordChange<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

#[derive(Deserialize)]
struct MessageResponse {
    message: String,
}

impl ApiClient {
    /// Update name or email. The session and cached profile follow the result.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<User> {
        if update.email.as_deref().is_some_and(|e| !e.contains('@')) {
            return Err(ApiError::InvalidInput("Invalid email address".to_string()));
        }
        let user: User = self.fetch(ApiRequest::put("/settings/profile").json(update)?).await?;

        if let Some(cache) = self.session().cache() {
            if let Err(e) = cache.save_profile(&user) {
                warn!(error = %e, "Failed to cache profile");
            }
        }
        self.session().set_user(user.clone());
        Ok(user)
    }

    pub async fn change_password(&self, current_password: &str, new_password: &str) -> ApiResult<String> {
        if current_password.is_empty() {
            return Err(ApiError::InvalidInput("Current password required".to_string()));
        }
        if new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::InvalidInput(format!(
                "New password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        let body = PasswordChange {
            current_password,
            new_password,
        };
        let response: MessageResponse = self
            .fetch(ApiRequest::post("/settings/change-password").json(&body)?)
            .await?;
        info!("Password changed");
        Ok(response.message)
    }

    pub async fn preferences(&self) -> ApiResult<UserPreferences> {
        self.fetch(ApiRequest::get("/settings/preferences")).await
    }

    pub async fn update_preferences(&self, update: &PreferencesUpdate) -> ApiResult<UserPreferences> {
        self.fetch(ApiRequest::put("/settings/preferences").json(update)?).await
    }
}
