//! Authentication module for managing sessions and stored tokens.
//!
//! This module provides:
//! - `TokenStore`: durable storage for the access/refresh pair (memory,
//!   JSON file or OS keychain)
//! - `Credentials`: the single accessor every token read/write goes through
//! - `Session`: observable auth state, teardown and the renewal slot

pub mod credentials;
pub mod session;
pub mod store;

pub use credentials::{Credentials, KeyringTokenStore, TokenPair};
pub use session::{Navigator, Session, SessionState, LOGIN_ROUTE};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
