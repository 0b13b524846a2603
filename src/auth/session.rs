//! Session management for GitLab API authentication.
//!
//! This module provides the [`Session`] type for representing the
//! authenticated identity used in API calls.

use serde::{Deserialize, Serialize};

use crate::config::AccessToken;

/// Token type used when a token response does not name one.
pub const DEFAULT_TOKEN_TYPE: &str = "Bearer";

/// Credentials used to sign GitLab API requests.
///
/// The field names match the OAuth implicit-grant token response, so a stored
/// response deserializes directly into a `Session`.
///
/// # Thread Safety
///
/// `Session` is `Send + Sync`, making it safe to share across threads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The access token for API authentication.
    pub access_token: AccessToken,

    /// The token type, sent as the `Authorization` scheme (usually `Bearer`).
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    DEFAULT_TOKEN_TYPE.to_string()
}

impl Session {
    /// Creates a new session.
    #[must_use]
    pub fn new(access_token: AccessToken, token_type: impl Into<String>) -> Self {
        Self {
            access_token,
            token_type: token_type.into(),
        }
    }

    /// Creates a session with the default `Bearer` token type.
    #[must_use]
    pub fn bearer(access_token: AccessToken) -> Self {
        Self::new(access_token, DEFAULT_TOKEN_TYPE)
    }

    /// Returns the `Authorization` header value, `<token type> <token>`.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.access_token.as_ref())
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
