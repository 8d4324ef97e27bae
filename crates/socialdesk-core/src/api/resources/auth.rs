use serde::Serialize;
use tracing::{info, warn};

use crate::api::{ApiClient, ApiError, ApiRequest, ApiResult};
use crate::auth::TokenPair;
use crate::models::{NewUser, User};

const LOGIN_PATH: &str = "/auth/login";
const REGISTER_PATH: &str = "/auth/register";
const ME_PATH: &str = "/auth/me";

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Sign in, persist the issued token pair and load the profile.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<User> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::InvalidInput("Email and password required".to_string()));
        }

        let request = ApiRequest::post(LOGIN_PATH).json(&LoginRequest { email, password })?;
        let pair: TokenPair = self.fetch_public(request).await?;
        self.session().establish(&pair, None)?;

        // A login without a profile is not a session
        let user = match self.current_user().await {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "Profile fetch after login failed");
                self.session().logout();
                return Err(e);
            }
        };
        info!(user_id = %user.id, "Login successful");
        Ok(user)
    }

    /// Create an account. Does not sign in.
    pub async fn register(&self, new_user: &NewUser) -> ApiResult<User> {
        if new_user.email.trim().is_empty() || new_user.password.is_empty() {
            return Err(ApiError::InvalidInput("Email and password required".to_string()));
        }
        self.fetch_public(ApiRequest::post(REGISTER_PATH).json(new_user)?).await
    }

    /// Fetch the signed-in profile. Success marks the session authenticated.
    pub async fn current_user(&self) -> ApiResult<User> {
        let user: User = self.fetch(ApiRequest::get(ME_PATH)).await?;

        if let Some(cache) = self.session().cache() {
            if let Err(e) = cache.save_profile(&user) {
                warn!(error = %e, "Failed to cache profile");
            }
        }
        self.session().set_user(user.clone());
        Ok(user)
    }

    /// Resume a stored session on startup.
    ///
    /// Returns `Ok(None)` when there are no stored tokens or they can no
    /// longer be renewed.
    pub async fn restore_session(&self) -> ApiResult<Option<User>> {
        if !self.session().credentials().has_session() {
            return Ok(None);
        }
        match self.current_user().await {
            Ok(user) => Ok(Some(user)),
            Err(e) if e.is_auth_failure() => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn logout(&self) {
        self.session().logout();
    }
}
