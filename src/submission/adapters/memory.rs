//! In-memory port adapters for creation-flow tests.
//!
//! Each adapter records what was asked of it so tests can assert on paths,
//! payloads, routes, and toasts. All adapters are thread-safe and cheap to
//! clone; clones share the same recorded state.

use crate::submission::ports::{
    AccessToken, AccessTokenProvider, AuthError, AuthResult, GatewayError, GatewayResult,
    Navigator, NotificationKind, Notifier, SubmitGateway,
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Token provider that always resolves to the same token or error.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    outcome: Result<AccessToken, AuthError>,
    requests: Arc<AtomicUsize>,
}

impl StaticTokenProvider {
    /// Creates a provider that always issues the given token.
    #[must_use]
    pub fn issuing(token: impl Into<String>) -> Self {
        Self {
            outcome: Ok(AccessToken::new(token.into())),
            requests: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Creates a provider that always fails with the given reason.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(AuthError(reason.into())),
            requests: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of token requests made so far.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> AuthResult<AccessToken> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// A single POST captured by [`RecordingGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPost {
    /// API path the payload was posted to.
    pub path: String,
    /// The JSON body as built by the payload builder.
    pub payload: Value,
    /// The bearer token the call carried.
    pub token: AccessToken,
}

/// Gateway double that records every POST and replays a fixed outcome.
#[derive(Debug, Clone)]
pub struct RecordingGateway {
    posts: Arc<RwLock<Vec<RecordedPost>>>,
    failure: Option<GatewayError>,
}

impl RecordingGateway {
    /// Creates a gateway that accepts every POST with an empty object body.
    #[must_use]
    pub fn succeeding() -> Self {
        Self {
            posts: Arc::new(RwLock::new(Vec::new())),
            failure: None,
        }
    }

    /// Creates a gateway that rejects every POST with the given error.
    #[must_use]
    pub fn failing(error: GatewayError) -> Self {
        Self {
            posts: Arc::new(RwLock::new(Vec::new())),
            failure: Some(error),
        }
    }

    /// Returns every recorded POST in arrival order.
    #[must_use]
    pub fn posts(&self) -> Vec<RecordedPost> {
        self.posts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl SubmitGateway for RecordingGateway {
    async fn post(&self, path: &str, payload: Value, token: &AccessToken) -> GatewayResult<Value> {
        self.posts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedPost {
                path: path.to_owned(),
                payload,
                token: token.clone(),
            });
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(Value::Object(serde_json::Map::new())),
        }
    }
}

/// Navigation sink that records requested routes.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    routes: Arc<RwLock<Vec<String>>>,
}

impl RecordingNavigator {
    /// Creates a navigator with no recorded transitions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every requested route in order.
    #[must_use]
    pub fn routes(&self) -> Vec<String> {
        self.routes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route.to_owned());
    }
}

/// A single toast captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedToast {
    /// Toast body.
    pub message: String,
    /// Toast title.
    pub title: String,
    /// Toast severity.
    pub kind: NotificationKind,
}

/// Notification sink that records every toast.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    toasts: Arc<RwLock<Vec<RecordedToast>>>,
}

impl RecordingNotifier {
    /// Creates a notifier with no recorded toasts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every recorded toast in order.
    #[must_use]
    pub fn toasts(&self) -> Vec<RecordedToast> {
        self.toasts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the recorded toasts of the given severity.
    #[must_use]
    pub fn toasts_of(&self, kind: NotificationKind) -> Vec<RecordedToast> {
        self.toasts()
            .into_iter()
            .filter(|toast| toast.kind == kind)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, title: &str, kind: NotificationKind) {
        self.toasts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedToast {
                message: message.to_owned(),
                title: title.to_owned(),
                kind,
            });
    }
}
