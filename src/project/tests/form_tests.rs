//! Tests for the project draft form and its submission protocol.

use crate::project::domain::ProjectDraft;
use crate::project::services::ProjectDraftForm;
use crate::submission::adapters::memory::{RecordingGateway, StaticTokenProvider};
use crate::submission::domain::SubmissionPhase;
use crate::submission::error::SubmissionError;
use crate::submission::ports::{AccessToken, GatewayError, GatewayResult, SubmitGateway};
use async_trait::async_trait;
use rstest::{fixture, rstest};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Notify;

struct Harness {
    form: ProjectDraftForm<StaticTokenProvider, RecordingGateway>,
    auth: StaticTokenProvider,
    gateway: RecordingGateway,
}

#[fixture]
fn harness() -> Harness {
    let auth = StaticTokenProvider::issuing("tok-project");
    let gateway = RecordingGateway::succeeding();
    let form = ProjectDraftForm::new(Arc::new(auth.clone()), Arc::new(gateway.clone()));
    Harness {
        form,
        auth,
        gateway,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_draft_reports_both_violations_without_network(harness: Harness) {
    let result = harness.form.submit().await;

    let Err(SubmissionError::Validation { violations }) = result else {
        panic!("expected validation failure");
    };
    assert_eq!(violations.len(), 2);
    assert_eq!(harness.auth.request_count(), 0);
    assert!(harness.gateway.posts().is_empty());
    assert_eq!(harness.form.phase(), SubmissionPhase::Idle);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn successful_submit_posts_verbatim_payload_and_resets(harness: Harness) {
    assert!(harness.form.set_title("Apollo"));
    assert!(harness.form.set_description("Mission tracker"));

    harness.form.submit().await.expect("submit should succeed");

    let posts = harness.gateway.posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].path, "/projects");
    assert_eq!(
        posts[0].payload,
        json!({"title": "Apollo", "description": "Mission tracker"})
    );
    assert_eq!(posts[0].token.as_str(), "tok-project");
    assert_eq!(harness.form.draft(), ProjectDraft::default());
    assert_eq!(harness.form.phase(), SubmissionPhase::Idle);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn auth_failure_aborts_before_any_network_effect() {
    let gateway = RecordingGateway::succeeding();
    let form = ProjectDraftForm::new(
        Arc::new(StaticTokenProvider::failing("session expired")),
        Arc::new(gateway.clone()),
    );
    assert!(form.set_title("Apollo"));
    assert!(form.set_description("Mission tracker"));
    let before = form.draft();

    let result = form.submit().await;

    assert!(matches!(result, Err(SubmissionError::Auth(_))));
    assert!(gateway.posts().is_empty());
    assert_eq!(form.draft(), before);
    assert_eq!(form.phase(), SubmissionPhase::Idle);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn gateway_failure_preserves_draft_and_allows_retry() {
    let gateway = RecordingGateway::failing(GatewayError::Http {
        path: "/projects".to_owned(),
        status: 500,
        message: "internal error".to_owned(),
    });
    let form = ProjectDraftForm::new(
        Arc::new(StaticTokenProvider::issuing("tok")),
        Arc::new(gateway.clone()),
    );
    assert!(form.set_title("Apollo"));
    assert!(form.set_description("Mission tracker"));
    let before = form.draft();

    let result = form.submit().await;
    assert!(matches!(result, Err(SubmissionError::Gateway(_))));
    assert_eq!(form.draft(), before);
    assert_eq!(form.phase(), SubmissionPhase::Idle);

    // The form is idle again; a retry reaches the gateway with the same data.
    let retry = form.submit().await;
    assert!(retry.is_err());
    assert_eq!(gateway.posts().len(), 2);
    assert_eq!(gateway.posts()[0].payload, gateway.posts()[1].payload);
}

/// Gateway that parks inside `post` until the test releases it.
#[derive(Clone)]
struct GatedGateway {
    entered: Arc<Notify>,
    release: Arc<Notify>,
}

impl GatedGateway {
    fn new() -> Self {
        Self {
            entered: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        }
    }
}

#[async_trait]
impl SubmitGateway for GatedGateway {
    async fn post(
        &self,
        _path: &str,
        _payload: Value,
        _token: &AccessToken,
    ) -> GatewayResult<Value> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(json!({}))
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn in_flight_submission_gates_edits_and_overlapping_triggers() {
    let gateway = GatedGateway::new();
    let form = Arc::new(ProjectDraftForm::new(
        Arc::new(StaticTokenProvider::issuing("tok")),
        Arc::new(gateway.clone()),
    ));
    assert!(form.set_title("Apollo"));
    assert!(form.set_description("Mission tracker"));

    let submitting = Arc::clone(&form);
    let handle = tokio::spawn(async move { submitting.submit().await });
    gateway.entered.notified().await;

    assert_eq!(form.phase(), SubmissionPhase::Submitting);
    assert!(!form.set_title("late edit"));
    assert!(matches!(
        form.submit().await,
        Err(SubmissionError::AlreadyInFlight)
    ));

    gateway.release.notify_one();
    let result = handle.await.expect("submission task should not panic");
    assert!(result.is_ok());
    assert_eq!(form.draft(), ProjectDraft::default());
    assert_eq!(form.phase(), SubmissionPhase::Idle);
}
