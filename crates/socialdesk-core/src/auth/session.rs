use std::sync::Arc;

use tokio::sync::{watch, Mutex, MutexGuard};
use tracing::{info, warn};

use super::credentials::{Credentials, TokenPair};
use super::store::TokenStore;
use crate::api::ApiError;
use crate::cache::CacheManager;
use crate::models::User;

/// Client route shown when the session ends
pub const LOGIN_ROUTE: &str = "/login";

/// UI-facing authentication state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub authenticated: bool,
    pub user: Option<User>,
}

/// Renewal attempt that ended the session instead of issuing a new pair.
///
/// Requests that were rejected with the same access token and queued on
/// the renewal slot take this outcome instead of trying again.
pub(crate) struct EndedRenewal {
    pub(crate) stale: String,
    /// `None` when there was no refresh token to spend
    pub(crate) error: Option<Arc<ApiError>>,
}

impl EndedRenewal {
    pub(crate) fn to_error(&self) -> ApiError {
        match self.error {
            Some(ref e) => ApiError::RenewalFailed(e.clone()),
            None => ApiError::Unauthorized,
        }
    }
}

/// Receives the route to show after the session is torn down.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str) + Send + Sync,
{
    fn navigate(&self, route: &str) {
        self(route)
    }
}

struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: &str) {
        info!(route, "Session ended, login required");
    }
}

/// Session context shared by every request flow.
///
/// Owns the token accessor, the observable auth state and the renewal
/// slot that keeps concurrent 401s down to one refresh call.
pub struct Session {
    credentials: Credentials,
    state: watch::Sender<SessionState>,
    navigator: Arc<dyn Navigator>,
    cache: Option<CacheManager>,
    login_route: String,
    renewal: Mutex<Option<EndedRenewal>>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            credentials: Credentials::new(store),
            state,
            navigator: Arc::new(LogNavigator),
            cache: None,
            login_route: LOGIN_ROUTE.to_string(),
            renewal: Mutex::new(None),
        }
    }

    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    /// Cache to wipe whenever the session ends
    pub fn with_cache(mut self, cache: CacheManager) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = route.into();
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn cache(&self) -> Option<&CacheManager> {
        self.cache.as_ref()
    }

    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().authenticated
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    /// Persist a freshly issued pair after login and mark the session live
    pub fn establish(&self, pair: &TokenPair, user: Option<User>) -> Result<(), ApiError> {
        self.credentials.store_pair(pair)?;
        self.state.send_modify(|s| {
            s.authenticated = true;
            s.user = user;
        });
        info!("Session established");
        Ok(())
    }

    /// Record a successfully fetched profile.
    pub fn set_user(&self, user: User) {
        self.state.send_modify(|s| {
            if !s.authenticated {
                info!(user_id = %user.id, "Session authenticated from profile");
            }
            s.authenticated = true;
            s.user = Some(user);
        });
    }

    /// User initiated sign-out: drop tokens, cache and state.
    pub fn logout(&self) {
        self.reset();
        info!("Logged out");
    }

    /// Forced end of session: everything `logout` does, then route to login.
    pub fn teardown(&self) {
        self.reset();
        warn!(route = %self.login_route, "Session torn down");
        self.navigator.navigate(&self.login_route);
    }

    fn reset(&self) {
        if let Err(e) = self.credentials.clear() {
            warn!(error = %e, "Failed to clear stored tokens");
        }
        if let Some(ref cache) = self.cache {
            if let Err(e) = cache.clear() {
                warn!(error = %e, "Failed to clear cache");
            }
        }
        self.state.send_modify(|s| {
            s.authenticated = false;
            s.user = None;
        });
    }

    /// Held for the duration of one renewal attempt. Guards the outcome of
    /// the last attempt that ended the session.
    pub(crate) async fn renewal_slot(&self) -> MutexGuard<'_, Option<EndedRenewal>> {
        self.renewal.lock().await
    }
}
