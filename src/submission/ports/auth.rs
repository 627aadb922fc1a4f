//! Token issuance port for authenticated submission.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Result type for token acquisition.
pub type AuthResult<T> = Result<T, AuthError>;

/// An opaque bearer token.
///
/// The token value is never inspected by the flows, only forwarded to the
/// gateway. `Debug` and `Display` redact the value to keep credentials out
/// of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw bearer token string.
    #[must_use]
    pub const fn new(raw: String) -> Self {
        Self(raw)
    }

    /// Returns the raw token for the `Authorization` header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccessToken {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Token acquisition failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("access token acquisition failed: {0}")]
pub struct AuthError(pub String);

/// Token issuance contract.
///
/// The provider is an opaque async capability; the flows request a token
/// only after validation passes and never start the gateway call until it
/// resolves.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Acquires a bearer token for the current user session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the session cannot produce a token; the
    /// calling flow aborts before any network effect.
    async fn access_token(&self) -> AuthResult<AccessToken>;
}
