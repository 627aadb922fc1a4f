//! Gateway port for authenticated payload submission.

use super::auth::AccessToken;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Authenticated submission contract.
///
/// Implementations perform `POST <baseURL><path>` with an
/// `Authorization: Bearer <token>` header and the given JSON body. Transport
/// policy (timeouts, retries, TLS) belongs entirely to the implementation.
#[async_trait]
pub trait SubmitGateway: Send + Sync {
    /// Posts a JSON payload to the given API path.
    ///
    /// Resolves with the response body; callers tolerate unused fields.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Http`] for non-success HTTP outcomes or
    /// [`GatewayError::Network`] when the call never completed.
    async fn post(&self, path: &str, payload: Value, token: &AccessToken) -> GatewayResult<Value>;
}

/// Errors returned by gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The backend answered with a non-success status.
    #[error("request to '{path}' failed with status {status}: {message}")]
    Http {
        /// The API path that was posted to.
        path: String,
        /// The HTTP status code.
        status: u16,
        /// Response body or status text.
        message: String,
    },

    /// The call failed below HTTP (DNS, connection, serialization).
    #[error("network error: {0}")]
    Network(Arc<dyn std::error::Error + Send + Sync>),
}

impl GatewayError {
    /// Wraps a transport-level error.
    pub fn network(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Network(Arc::new(err))
    }
}
