//! Tests for the in-memory port adapters.

use crate::submission::adapters::memory::{
    RecordingGateway, RecordingNavigator, RecordingNotifier, StaticTokenProvider,
};
use crate::submission::ports::{
    AccessTokenProvider, GatewayError, Navigator, NotificationKind, Notifier, SubmitGateway,
};
use serde_json::json;

#[tokio::test(flavor = "multi_thread")]
async fn static_provider_issues_and_counts() {
    let provider = StaticTokenProvider::issuing("tok-1");
    let token = provider.access_token().await.expect("token should issue");
    assert_eq!(token.as_str(), "tok-1");
    let _ = provider.access_token().await;
    assert_eq!(provider.request_count(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn failing_provider_reports_reason() {
    let provider = StaticTokenProvider::failing("no session");
    let err = provider
        .access_token()
        .await
        .expect_err("provider should fail");
    assert!(err.to_string().contains("no session"));
    assert_eq!(provider.request_count(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn recording_gateway_captures_posts_in_order() {
    let gateway = RecordingGateway::succeeding();
    let token = "tok".into();
    gateway
        .post("/projects", json!({"title": "a"}), &token)
        .await
        .expect("post should succeed");
    gateway
        .post("/projects/1/tasks", json!({"title": "b"}), &token)
        .await
        .expect("post should succeed");

    let posts = gateway.posts();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].path, "/projects");
    assert_eq!(posts[1].payload, json!({"title": "b"}));
}

#[tokio::test(flavor = "multi_thread")]
async fn failing_gateway_still_records_the_attempt() {
    let gateway = RecordingGateway::failing(GatewayError::Http {
        path: "/projects".to_owned(),
        status: 401,
        message: "unauthorized".to_owned(),
    });
    let result = gateway.post("/projects", json!({}), &"tok".into()).await;
    assert!(matches!(result, Err(GatewayError::Http { status: 401, .. })));
    assert_eq!(gateway.posts().len(), 1);
}

#[test]
fn recording_notifier_filters_by_kind() {
    let notifier = RecordingNotifier::new();
    notifier.notify("created", "Issue created", NotificationKind::Info);
    notifier.notify("missing title", "Title required", NotificationKind::Warning);

    assert_eq!(notifier.toasts().len(), 2);
    let warnings = notifier.toasts_of(NotificationKind::Warning);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].title, "Title required");
}

#[test]
fn recording_navigator_clones_share_state() {
    let navigator = RecordingNavigator::new();
    let clone = navigator.clone();
    clone.navigate("/projects/1/tasks");
    assert_eq!(navigator.routes(), vec!["/projects/1/tasks".to_owned()]);
}
