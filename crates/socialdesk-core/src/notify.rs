//! Transient user notifications.
//!
//! Front ends push a toast after an action completes or fails and render
//! `ToastStore::active()` on each frame. Toasts expire on their own.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use crate::api::ApiError;

const DEFAULT_TTL_SECS: i64 = 4;
const ERROR_TTL_SECS: i64 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub ttl: Duration,
}

impl Toast {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at >= self.ttl
    }
}

#[derive(Default)]
struct Queue {
    next_id: u64,
    toasts: Vec<Toast>,
}

/// Thread-safe toast queue
#[derive(Default)]
pub struct ToastStore {
    inner: Mutex<Queue>,
}

impl ToastStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message.into(), Duration::seconds(DEFAULT_TTL_SECS))
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Info, message.into(), Duration::seconds(DEFAULT_TTL_SECS))
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message.into(), Duration::seconds(ERROR_TTL_SECS))
    }

    /// Error toast with the short user-facing text for `err`
    pub fn api_error(&self, err: &ApiError) -> u64 {
        self.error(err.user_message())
    }

    pub fn push(&self, kind: ToastKind, message: String, ttl: Duration) -> u64 {
        let mut queue = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        queue.next_id += 1;
        let id = queue.next_id;
        queue.toasts.push(Toast {
            id,
            kind,
            message,
            created_at: Utc::now(),
            ttl,
        });
        id
    }

    /// Returns false if no toast had that id
    pub fn dismiss(&self, id: u64) -> bool {
        let mut queue = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let before = queue.toasts.len();
        queue.toasts.retain(|t| t.id != id);
        queue.toasts.len() != before
    }

    /// Unexpired toasts, oldest first. Expired ones are dropped.
    pub fn active(&self) -> Vec<Toast> {
        self.active_at(Utc::now())
    }

    fn active_at(&self, now: DateTime<Utc>) -> Vec<Toast> {
        let mut queue = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        queue.toasts.retain(|t| !t.is_expired(now));
        queue.toasts.clone()
    }

    /// Take every queued toast, expired or not
    pub fn drain(&self) -> Vec<Toast> {
        let mut queue = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut queue.toasts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let toasts = ToastStore::new();
        let first = toasts.success("Post scheduled");
        let second = toasts.info("Syncing");
        assert_ne!(first, second);

        assert!(toasts.dismiss(first));
        assert!(!toasts.dismiss(first));

        let active = toasts.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, "Syncing");
    }

    #[test]
    fn test_active_prunes_expired() {
        let toasts = ToastStore::new();
        toasts.success("short");
        toasts.error("long");

        let later = Utc::now() + Duration::seconds(DEFAULT_TTL_SECS + 1);
        let active = toasts.active_at(later);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].kind, ToastKind::Error);
        assert_eq!(toasts.drain().len(), 1);
    }

    #[test]
    fn test_api_error_uses_user_message() {
        let toasts = ToastStore::new();
        toasts.api_error(&ApiError::Unauthorized);
        let drained = toasts.drain();
        assert_eq!(drained[0].kind, ToastKind::Error);
        assert_eq!(drained[0].message, ApiError::Unauthorized.user_message());
        assert!(toasts.drain().is_empty());
    }
}
