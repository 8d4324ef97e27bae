use std::sync::Arc;

use anyhow::{Context, Result};
use keyring::Entry;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::store::{TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use crate::api::ApiError;

const SERVICE_NAME: &str = "socialdesk";

/// Access/refresh pair as issued by the login and refresh endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Tokens kept in the OS keychain, one entry per storage key.
pub struct KeyringTokenStore {
    service: String,
}

impl KeyringTokenStore {
    pub fn new() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
        }
    }

    fn entry(&self, key: &str) -> Result<Entry> {
        Entry::new(&self.service, key).context("Failed to create keyring entry")
    }
}

impl Default for KeyringTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for KeyringTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e).context("Failed to retrieve token from keychain"),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entry(key)?
            .set_password(value)
            .context("Failed to store token in keychain")
    }

    fn remove(&self, key: &str) -> Result<()> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e).context("Failed to delete token from keychain"),
        }
    }
}

/// The only path through which session tokens are read or written.
#[derive(Clone)]
pub struct Credentials {
    store: Arc<dyn TokenStore>,
}

fn store_error(e: anyhow::Error) -> ApiError {
    ApiError::CredentialStore(format!("{:#}", e))
}

impl Credentials {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    pub fn access_token(&self) -> Result<Option<String>, ApiError> {
        self.store.get(ACCESS_TOKEN_KEY).map_err(store_error)
    }

    pub fn refresh_token(&self) -> Result<Option<String>, ApiError> {
        self.store.get(REFRESH_TOKEN_KEY).map_err(store_error)
    }

    /// Persist a freshly issued pair, replacing both tokens
    pub fn store_pair(&self, pair: &TokenPair) -> Result<(), ApiError> {
        self.store
            .set(ACCESS_TOKEN_KEY, &pair.access_token)
            .map_err(store_error)?;
        self.store
            .set(REFRESH_TOKEN_KEY, &pair.refresh_token)
            .map_err(store_error)?;
        debug!(
            access_len = pair.access_token.len(),
            refresh_len = pair.refresh_token.len(),
            "Stored token pair"
        );
        Ok(())
    }

    /// Remove both tokens. Attempts both removals even if the first fails.
    pub fn clear(&self) -> Result<(), ApiError> {
        let access = self.store.remove(ACCESS_TOKEN_KEY);
        let refresh = self.store.remove(REFRESH_TOKEN_KEY);
        access.map_err(store_error)?;
        refresh.map_err(store_error)?;
        debug!("Cleared stored tokens");
        Ok(())
    }

    /// Both tokens are present
    pub fn has_session(&self) -> bool {
        matches!(
            (self.access_token(), self.refresh_token()),
            (Ok(Some(_)), Ok(Some(_)))
        )
    }
}
